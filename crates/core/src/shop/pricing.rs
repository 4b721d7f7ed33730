//! Order pricing rules.
//!
//! Totals are always recomputed server-side from the stored shop prices;
//! any amounts supplied by the client are ignored.

use thiserror::Error;

use super::OrderItem;

/// Errors produced while pricing an order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Order must contain at least one item")]
    EmptyOrder,
    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(i64),
    #[error("Order total {total_cents} is below the minimum of {minimum_cents}")]
    BelowMinimum { total_cents: i64, minimum_cents: i64 },
    #[error("Order total is too large")]
    TotalOverflow,
}

/// Computes the order total from its lines.
///
/// Fails on an empty order, any non-positive quantity, or a total that
/// does not fit in `i64`. Quantities come straight from the checkout
/// payload, so the arithmetic here must stay checked.
pub fn order_total(items: &[OrderItem]) -> Result<i64, PricingError> {
    if items.is_empty() {
        return Err(PricingError::EmptyOrder);
    }
    let mut total = 0i64;
    for item in items {
        if item.quantity < 1 {
            return Err(PricingError::InvalidQuantity(item.quantity));
        }
        let subtotal = item
            .price_cents
            .checked_mul(item.quantity)
            .ok_or(PricingError::TotalOverflow)?;
        total = total
            .checked_add(subtotal)
            .ok_or(PricingError::TotalOverflow)?;
    }
    Ok(total)
}

/// Enforces the minimum-order threshold.
///
/// A minimum of zero disables the check.
pub fn check_minimum(total_cents: i64, minimum_cents: i64) -> Result<(), PricingError> {
    if minimum_cents > 0 && total_cents < minimum_cents {
        return Err(PricingError::BelowMinimum {
            total_cents,
            minimum_cents,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::ShopItem;
    use uuid::Uuid;

    fn line(price_cents: i64, quantity: i64) -> OrderItem {
        let item = ShopItem::new("Print", price_cents, 100);
        let mut line = OrderItem::from_item(Uuid::new_v4(), &item, quantity);
        line.quantity = quantity;
        line
    }

    #[test]
    fn test_order_total_sums_lines() {
        let items = vec![line(1_500, 2), line(4_000, 1)];
        assert_eq!(order_total(&items), Ok(7_000));
    }

    #[test]
    fn test_order_total_rejects_empty_order() {
        assert_eq!(order_total(&[]), Err(PricingError::EmptyOrder));
    }

    #[test]
    fn test_order_total_rejects_zero_quantity() {
        let items = vec![line(1_500, 0)];
        assert_eq!(order_total(&items), Err(PricingError::InvalidQuantity(0)));
    }

    #[test]
    fn test_order_total_rejects_negative_quantity() {
        let items = vec![line(1_500, -2)];
        assert_eq!(order_total(&items), Err(PricingError::InvalidQuantity(-2)));
    }

    #[test]
    fn test_order_total_rejects_overflowing_line() {
        let items = vec![line(2, i64::MAX / 2 + 5)];
        assert_eq!(order_total(&items), Err(PricingError::TotalOverflow));
    }

    #[test]
    fn test_order_total_rejects_overflowing_sum() {
        let items = vec![line(i64::MAX, 1), line(1, 1)];
        assert_eq!(order_total(&items), Err(PricingError::TotalOverflow));
    }

    #[test]
    fn test_minimum_is_enforced() {
        assert_eq!(
            check_minimum(900, 1_000),
            Err(PricingError::BelowMinimum {
                total_cents: 900,
                minimum_cents: 1_000
            })
        );
    }

    #[test]
    fn test_minimum_boundary_is_accepted() {
        assert_eq!(check_minimum(1_000, 1_000), Ok(()));
    }

    #[test]
    fn test_zero_minimum_disables_check() {
        assert_eq!(check_minimum(1, 0), Ok(()));
    }
}
