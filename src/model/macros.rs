//! Declarative macros for the per-property boilerplate of the model.

/// Defines a field set: the struct, one [`PropertyInfo`] constant per
/// property, the [`FieldSet`] implementation, and chainable setters on
/// `$target` (the field set itself, or the builder of the class owning it).
///
/// Every property is declared as
/// `field: Option<T> | Vec<T> => CONST("jsonKey", predicate, "Label") => setter, many;`
/// where `setter` takes one value. For `Vec` properties `many` adds every
/// value of an iterator; for `Option` properties it replaces the value,
/// clearing it on `None`.
///
/// [`PropertyInfo`]: crate::property::PropertyInfo
/// [`FieldSet`]: crate::model::FieldSet
macro_rules! field_set {
    (@many Option, $target:ty, $name:ident, $field:ident, $item:ty, $many:ident) => {
        impl $target {
            pub fn $many(mut self, value: Option<$item>) -> Self {
                AsMut::<$name>::as_mut(&mut self).$field = value;
                self
            }
        }
    };
    (@many Vec, $target:ty, $name:ident, $field:ident, $item:ty, $many:ident) => {
        impl $target {
            pub fn $many<V: Into<$item>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
                let slot = &mut AsMut::<$name>::as_mut(&mut self).$field;
                for value in values {
                    $crate::property::Property::put(slot, value.into());
                }
                self
            }
        }
    };
    (
        $(#[$meta:meta])*
        pub struct $name:ident($kind:ident) setters on $target:ty {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $card:ident<$item:ty>
                    => $info:ident($key:literal, $predicate:expr, $label:literal)
                    => $setter:ident, $many:ident;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $card<$item>,
            )*
        }

        impl $name {
            $(
                pub const $info: $crate::property::PropertyInfo = $crate::property::PropertyInfo::new(
                    stringify!($kind),
                    $key,
                    $predicate,
                    $label,
                );
            )*

            pub const PROPERTIES: &'static [$crate::property::PropertyInfo] = &[$(Self::$info),*];
        }

        impl AsMut<$name> for $name {
            fn as_mut(&mut self) -> &mut $name {
                self
            }
        }

        impl $target {
            $(
                pub fn $setter(mut self, value: impl Into<$item>) -> Self {
                    let slot = &mut AsMut::<$name>::as_mut(&mut self).$field;
                    $crate::property::Property::put(slot, value.into());
                    self
                }
            )*
        }

        $(
            field_set!(@many $card, $target, $name, $field, $item, $many);
        )*

        impl $crate::model::FieldSet for $name {
            const INFO: $crate::model::FieldSetInfo = $crate::model::FieldSetInfo {
                class: $crate::model::ClassKind::$kind,
                properties: Self::PROPERTIES,
            };

            fn equals(&self, other: &Self) -> $crate::equality::EqualsResult {
                $(
                    $crate::property::equals(&self.$field, &other.$field, &Self::$info)?;
                )*
                Ok(())
            }

            fn hash_into<H: ::sha2::Digest>(&self, hasher: &mut H) {
                $(
                    $crate::property::Property::hash_into(&self.$field, hasher);
                )*
            }

            fn canonicalize(&mut self) {
                $(
                    $crate::property::Property::canonicalize(&mut self.$field);
                )*
            }

            fn write_json(&self, object: &mut ::serde_json::Map<String, ::serde_json::Value>) {
                $(
                    $crate::property::Property::write_json(&self.$field, object, &Self::$info);
                )*
            }

            fn read_json(
                object: &$crate::json::JsonObject<'_>,
            ) -> Result<Self, $crate::json::JsonError> {
                Ok(Self {
                    $(
                        $field: $crate::property::Property::read_json(object, &Self::$info)?,
                    )*
                })
            }

            fn write_rdf(&self, resource: &mut $crate::rdf::MutableResource<'_>) {
                $(
                    $crate::property::Property::write_rdf(&self.$field, resource, &Self::$info);
                )*
            }

            fn read_rdf(
                resource: &$crate::rdf::Resource<'_>,
            ) -> Result<Self, $crate::rdf::ResourceError> {
                Ok(Self {
                    $(
                        $field: $crate::property::Property::read_rdf(resource, &Self::$info)?,
                    )*
                })
            }

            fn write_schema(
                generator: &mut ::schemars::SchemaGenerator,
                properties: &mut ::serde_json::Map<String, ::serde_json::Value>,
            ) {
                $(
                    $crate::property::insert_schema::<$card<$item>>(generator, properties, &Self::$info);
                )*
            }
        }
    };
}

/// Makes concrete classes usable as property values, with `PartialEq`
/// through `ObjectType::equals` and a schemars schema built from their
/// field sets.
macro_rules! object_value {
    ($($ty:ident),* $(,)?) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    $crate::model::ObjectType::equals(self, other).is_ok()
                }
            }

            impl $crate::property::PropertyValue for $ty {
                fn value_equals(&self, other: &Self) -> $crate::equality::EqualsResult {
                    $crate::model::ObjectType::equals(self, other)
                }

                fn hash_value<H: ::sha2::Digest>(&self, hasher: &mut H) {
                    $crate::model::ObjectType::hash(self, hasher);
                }

                fn sort_key(&self) -> String {
                    $crate::model::ObjectType::identifier(self).as_str().to_string()
                }

                fn to_json_value(&self) -> ::serde_json::Value {
                    $crate::model::ObjectType::to_json(self)
                }

                fn from_json_value(
                    value: &::serde_json::Value,
                    path: &$crate::json::JsonPath,
                ) -> Result<Self, $crate::json::JsonError> {
                    <Self as $crate::model::ObjectType>::from_json_at(value, path)
                }

                fn to_rdf_term(&self, graph: &mut ::oxigraph::model::Graph) -> ::oxigraph::model::Term {
                    ::oxigraph::model::Term::NamedNode($crate::model::ObjectType::to_rdf(self, graph, false))
                }

                fn from_rdf_term(
                    term: &::oxigraph::model::Term,
                    context: &$crate::rdf::ValueContext<'_, '_>,
                ) -> Result<Self, $crate::rdf::ResourceError> {
                    let nested = context.nested(term)?;
                    <Self as $crate::model::ObjectType>::from_rdf(&nested, false)
                }

                fn value_schema(generator: &mut ::schemars::SchemaGenerator) -> ::schemars::Schema {
                    generator.subschema_for::<Self>()
                }
            }

            impl ::schemars::JsonSchema for $ty {
                fn schema_name() -> ::std::borrow::Cow<'static, str> {
                    ::std::borrow::Cow::Borrowed(stringify!($ty))
                }

                fn json_schema(generator: &mut ::schemars::SchemaGenerator) -> ::schemars::Schema {
                    $crate::schema::object_schema::<Self>(generator)
                }
            }
        )*
    };
}
