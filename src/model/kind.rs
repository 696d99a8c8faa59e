//! The class hierarchy.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use oxigraph::model::NamedNodeRef;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::rdf::vocab::schema;

/// A class of the vocabulary, abstract or concrete.
///
/// The string form is the class name used as the JSON `type` discriminant
/// and as the local name of the class IRI.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum ClassKind {
    Thing,
    Intangible,
    StructuredValue,
    Enumeration,
    CreativeWork,
    MediaObject,
    ImageObject,
    Person,
    Organization,
    Role,
    Occupation,
    QuantitativeValue,
    GenderType,
}

static BY_IRI: Lazy<HashMap<&'static str, ClassKind>> =
    Lazy::new(|| ClassKind::iter().map(|kind| (kind.iri().as_str(), kind)).collect());

impl ClassKind {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    pub fn iri(self) -> NamedNodeRef<'static> {
        match self {
            ClassKind::Thing => schema::THING,
            ClassKind::Intangible => schema::INTANGIBLE,
            ClassKind::StructuredValue => schema::STRUCTURED_VALUE,
            ClassKind::Enumeration => schema::ENUMERATION,
            ClassKind::CreativeWork => schema::CREATIVE_WORK,
            ClassKind::MediaObject => schema::MEDIA_OBJECT,
            ClassKind::ImageObject => schema::IMAGE_OBJECT,
            ClassKind::Person => schema::PERSON,
            ClassKind::Organization => schema::ORGANIZATION,
            ClassKind::Role => schema::ROLE,
            ClassKind::Occupation => schema::OCCUPATION,
            ClassKind::QuantitativeValue => schema::QUANTITATIVE_VALUE,
            ClassKind::GenderType => schema::GENDER_TYPE,
        }
    }

    pub fn from_iri(iri: &str) -> Option<Self> {
        BY_IRI.get(iri).copied()
    }

    pub fn parent(self) -> Option<Self> {
        match self {
            ClassKind::Thing => None,
            ClassKind::Intangible
            | ClassKind::CreativeWork
            | ClassKind::Person
            | ClassKind::Organization => Some(ClassKind::Thing),
            ClassKind::StructuredValue
            | ClassKind::Enumeration
            | ClassKind::Role
            | ClassKind::Occupation => Some(ClassKind::Intangible),
            ClassKind::MediaObject => Some(ClassKind::CreativeWork),
            ClassKind::ImageObject => Some(ClassKind::MediaObject),
            ClassKind::QuantitativeValue => Some(ClassKind::StructuredValue),
            ClassKind::GenderType => Some(ClassKind::Enumeration),
        }
    }

    /// This class followed by its ancestors, up to `Thing`.
    pub fn ancestry(self) -> impl Iterator<Item = ClassKind> {
        std::iter::successors(Some(self), |kind| kind.parent())
    }

    /// Whether `self` is `other` or one of its descendants.
    pub fn is_subclass_of(self, other: ClassKind) -> bool {
        self.ancestry().any(|kind| kind == other)
    }

    /// Number of ancestors; `Thing` has depth 0.
    pub fn depth(self) -> usize {
        self.ancestry().count() - 1
    }

    /// Abstract classes only contribute field sets and never appear as
    /// values of their own.
    pub fn is_abstract(self) -> bool {
        matches!(
            self,
            ClassKind::Intangible
                | ClassKind::StructuredValue
                | ClassKind::Enumeration
                | ClassKind::CreativeWork
                | ClassKind::MediaObject
        )
    }

    /// Nearest concrete class among this class and its ancestors.
    pub fn concrete(self) -> ClassKind {
        self.ancestry()
            .find(|kind| !kind.is_abstract())
            .unwrap_or(ClassKind::Thing)
    }

    pub fn concrete_kinds() -> impl Iterator<Item = ClassKind> {
        ClassKind::iter().filter(|kind| !kind.is_abstract())
    }

    /// Classes whose values a decoder for `self` accepts.
    pub fn descendants(self) -> impl Iterator<Item = ClassKind> {
        ClassKind::iter().filter(move |kind| kind.is_subclass_of(self))
    }

    /// The most specific of `kinds`, preferring deeper classes.
    pub fn most_specific(kinds: impl IntoIterator<Item = ClassKind>) -> Option<ClassKind> {
        kinds.into_iter().max_by_key(|kind| (kind.depth(), *kind))
    }
}
