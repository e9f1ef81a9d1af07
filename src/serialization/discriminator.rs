use crate::serialization::{DeserializationError, ParseNode};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

pub const ODATA_TYPE_KEY: &str = "@odata.type";

pub type DiscriminatorRegistry<F> = RwLock<HashMap<&'static str, fn() -> F>>;

/// A polymorphic slot whose concrete variant is picked from the `@odata.type` tag of the payload.
pub trait DiscriminatorFamily: Sized + 'static {
    fn registry() -> &'static DiscriminatorRegistry<Self>;

    /// The variant used when the payload carries no tag or one nobody registered.
    fn fallback() -> Self;
}

/// A concrete variant with a fixed type tag, stamped on every new instance.
pub trait Discriminated {
    const ODATA_TYPE: &'static str;
}

pub fn register_discriminator<F, T>()
where
    F: DiscriminatorFamily,
    T: Discriminated + Default + Into<F>,
{
    F::registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(T::ODATA_TYPE, || T::default().into());
}

pub fn known_discriminators<F: DiscriminatorFamily>() -> Vec<&'static str> {
    let registry = F::registry().read().unwrap_or_else(PoisonError::into_inner);
    let mut known: Vec<&'static str> = registry.keys().copied().collect();
    known.sort_unstable();
    known
}

pub fn create_from_discriminator_value<F: DiscriminatorFamily>(node: &dyn ParseNode) -> Result<F, DeserializationError> {
    let Some(mapping_node) = node.child_node(ODATA_TYPE_KEY) else {
        return Ok(F::fallback());
    };
    let Some(mapping_value) = mapping_node.string_value()? else {
        return Ok(F::fallback());
    };

    let registry = F::registry().read().unwrap_or_else(PoisonError::into_inner);
    match registry.get(mapping_value.as_str()) {
        Some(create) => Ok(create()),
        None => {
            debug!(odata_type = %mapping_value, "no variant registered for discriminator, using the base type");
            Ok(F::fallback())
        }
    }
}
