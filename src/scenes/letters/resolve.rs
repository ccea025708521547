use std::fmt;

use rand::{seq::IndexedRandom, Rng};

use super::{catalog::VariantCatalog, ResourceKey, Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The symbol's namespace exists but offers nothing to show or play, or
    /// does not exist at all. Raised as a named condition so the controller
    /// can abort the activation instead of tripping over an empty list.
    NoVariantsAvailable { symbol: Symbol },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NoVariantsAvailable { symbol } => {
                write!(f, "no variants available for {symbol}; ignoring the activation")
            }
        }
    }
}

/// Picks one of the symbol's variants uniformly at random. The resulting
/// key is handed unchanged to both the renderer and the voice slot.
pub fn resolve<C, R>(symbol: Symbol, catalog: &C, rng: &mut R) -> Result<ResourceKey, ResolveError>
where
    C: VariantCatalog + ?Sized,
    R: Rng + ?Sized,
{
    let variants = catalog.list_variants(symbol);
    match variants.choose(rng) {
        Some(variant) => Ok(ResourceKey {
            symbol,
            variant: variant.clone(),
        }),
        None => Err(ResolveError::NoVariantsAvailable { symbol }),
    }
}
