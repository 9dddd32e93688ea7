//! Self-description of schema objects.

use crate::{Encoder, Result};

/// A schema object that can render itself into an [`Encoder`].
///
/// Implementations list their members with the encoder's `emit_*` calls (or
/// [`Encoder::emit_field`]) and leave object framing to [`Describe::store`].
/// Most types get this impl from the [`describe!`](crate::describe) macro;
/// polymorphic types implement it by hand and report the variant in
/// [`Describe::type_name`].
///
/// The trait is object safe, so `Box<dyn Describe>` works as a polymorphic
/// field value.
///
/// # Examples
///
/// ```rust
/// use tl_inspect::{to_string, Describe, Encoder, Result};
///
/// struct Ping {
///     id: i64,
/// }
///
/// impl Describe for Ping {
///     fn type_name(&self) -> &str {
///         "ping"
///     }
///
///     fn describe_fields(&self, encoder: &mut Encoder) -> Result<()> {
///         encoder.emit_scalar("id", &self.id);
///         Ok(())
///     }
/// }
///
/// let json = to_string(&Ping { id: 5 }).unwrap();
/// assert_eq!(json, "{\n  \"@type\": \"ping\",\n  \"id\": 5\n}");
/// ```
pub trait Describe {
    /// Discriminant written as the object's `@type` member.
    fn type_name(&self) -> &str;

    /// Emits every member except the discriminant.
    fn describe_fields(&self, encoder: &mut Encoder) -> Result<()>;

    /// Emits the whole object under `field_name`.
    fn store(&self, encoder: &mut Encoder, field_name: &str) -> Result<()> {
        encoder.begin_object(field_name, self.type_name())?;
        self.describe_fields(encoder)?;
        encoder.end_object();
        Ok(())
    }
}
