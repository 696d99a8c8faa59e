//! The object model.
//!
//! Inheritance is expressed by composition: every class declares a field
//! set ([`ThingProperties`], [`CreativeWorkProperties`], ...) and a
//! concrete class holds its identifier plus the field sets of itself and
//! all of its ancestors. Properties that may hold more than one class are
//! tagged unions ([`Agent`], [`Membership`]); [`AnyObject`] covers every
//! concrete class.
//!
//! # Example
//!
//! ```rust
//! use schemaorg_rdf::model::{ObjectType, Person, ThingProperties};
//!
//! let alice = Person::builder()
//!     .identifier(schemaorg_rdf::Identifier::parse("http://example.org/alice").unwrap())
//!     .thing(ThingProperties::default().name("Alice"))
//!     .given_name("Alice")
//!     .job_title("Engineer")
//!     .build();
//!
//! let json = alice.to_json();
//! assert_eq!(json["type"], "Person");
//! assert_eq!(Person::from_json(&json).unwrap(), alice);
//! ```

#[macro_use]
mod macros;

mod any;
mod creative_work;
mod gender_type;
mod image_object;
mod kind;
mod media_object;
mod object;
mod occupation;
mod organization;
mod person;
mod quantitative_value;
mod role;
mod thing;
mod union;

pub use any::AnyObject;
pub use creative_work::CreativeWorkProperties;
pub use gender_type::{GenderMember, GenderType};
pub use image_object::{ImageObject, ImageObjectBuilder, ImageObjectProperties};
pub use kind::ClassKind;
pub use media_object::MediaObjectProperties;
pub use object::{FieldSet, FieldSetInfo, ObjectType};
pub use occupation::{Occupation, OccupationBuilder, OccupationProperties};
pub use organization::{Organization, OrganizationBuilder, OrganizationProperties};
pub use person::{Person, PersonBuilder, PersonProperties};
pub use quantitative_value::{QuantitativeValue, QuantitativeValueBuilder, QuantitativeValueProperties};
pub use role::{Role, RoleBuilder, RoleProperties};
pub use thing::{Thing, ThingBuilder, ThingProperties};
pub use union::{Agent, Membership};

object_value!(
    Thing,
    ImageObject,
    Person,
    Organization,
    Role,
    Occupation,
    QuantitativeValue,
    GenderType,
);
