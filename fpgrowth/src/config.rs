use crate::error::{FpError, Result};

/// Order in which a projected transaction's surviving items are inserted.
///
/// The order only changes how much prefix sharing the tree gets. `Ranked`
/// additionally gives every transaction the same global order, which is what
/// lets ancestor-only prefix paths see every co-occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemOrder {
    /// Keep items in the order the transaction lists them.
    Encountered,
    /// Stable sort by descending global support; ties keep transaction order.
    #[default]
    Support,
    /// Descending global support, ties broken by first-seen rank.
    Ranked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthConfig {
    pub min_support: usize,
    pub item_order: ItemOrder,
    pub include_support: bool,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            min_support: 2,
            item_order: ItemOrder::default(),
            include_support: false,
        }
    }
}

impl GrowthConfig {
    pub fn new(min_support: usize) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_item_order(mut self, item_order: ItemOrder) -> Self {
        self.item_order = item_order;
        self
    }

    pub fn with_support(mut self, include_support: bool) -> Self {
        self.include_support = include_support;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_support == 0 {
            return Err(FpError::InvalidArgument(
                "minimum support must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_min_support_rejected() {
        let err = GrowthConfig::new(0).validate().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(GrowthConfig::new(1).validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = GrowthConfig::new(3)
            .with_item_order(ItemOrder::Ranked)
            .with_support(true);
        assert_eq!(config.min_support, 3);
        assert_eq!(config.item_order, ItemOrder::Ranked);
        assert!(config.include_support);
    }
}
