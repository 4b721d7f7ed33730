//! Email template string-building.
//!
//! Pure render functions for the two order notification emails. Transport
//! lives in the server crate.

use crate::shop::{DeliveryMethod, Order, OrderItem};

/// A rendered email: subject line plus plain-text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailBody {
    pub subject: String,
    pub text: String,
}

/// Formats minor units as a euro amount, e.g. `1250` -> `"€12.50"`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}€{}.{:02}", sign, abs / 100, abs % 100)
}

fn render_lines(items: &[OrderItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!(
            "  {} x {} - {}\n",
            item.quantity,
            item.title,
            format_cents(item.subtotal_cents())
        ));
    }
    out
}

fn render_delivery(delivery: &DeliveryMethod) -> String {
    match delivery {
        DeliveryMethod::Pickup { pickup_point_id } => {
            format!("Pickup at point {}", pickup_point_id)
        }
        DeliveryMethod::Courier { address } => format!("Courier to {}", address),
    }
}

/// Renders the confirmation email sent to the customer.
pub fn render_order_confirmation(order: &Order, items: &[OrderItem]) -> EmailBody {
    let mut text = format!(
        "Hello {},\n\nThank you for your order at the gallery shop.\n\nYour order:\n",
        order.customer_name
    );
    text.push_str(&render_lines(items));
    text.push_str(&format!(
        "\nTotal: {}\nDelivery: {}\n",
        format_cents(order.total_cents),
        render_delivery(&order.delivery)
    ));
    if let Some(comment) = &order.comment {
        text.push_str(&format!("Comment: {}\n", comment));
    }
    text.push_str("\nWe will contact you once the order is on its way.\n");

    EmailBody {
        subject: format!("Order confirmation {}", order.id),
        text,
    }
}

/// Renders the notification email sent to the back office.
pub fn render_admin_notification(order: &Order, items: &[OrderItem]) -> EmailBody {
    let mut text = format!(
        "New order {} placed.\n\nCustomer: {} <{}>\n",
        order.id, order.customer_name, order.customer_email
    );
    if let Some(phone) = &order.customer_phone {
        text.push_str(&format!("Phone: {}\n", phone));
    }
    text.push_str(&format!(
        "Delivery: {}\n\nItems:\n",
        render_delivery(&order.delivery)
    ));
    text.push_str(&render_lines(items));
    text.push_str(&format!("\nTotal: {}\n", format_cents(order.total_cents)));
    if let Some(comment) = &order.comment {
        text.push_str(&format!("Comment: {}\n", comment));
    }

    EmailBody {
        subject: format!("New order {}", order.id),
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::ShopItem;
    use uuid::Uuid;

    fn sample_order() -> (Order, Vec<OrderItem>) {
        let order = Order::new(
            "Ann Riva",
            "ann@example.com",
            DeliveryMethod::Courier {
                address: "3 Mill Lane".to_string(),
            },
            7_500,
        )
        .with_phone("+4915550000")
        .with_comment("leave at the door");

        let item = ShopItem::new("Exhibition catalog", 2_500, 40);
        let items = vec![OrderItem::from_item(order.id, &item, 3)];
        (order, items)
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "€0.00");
        assert_eq!(format_cents(5), "€0.05");
        assert_eq!(format_cents(1_250), "€12.50");
        assert_eq!(format_cents(-930), "-€9.30");
    }

    #[test]
    fn test_confirmation_contains_lines_and_total() {
        let (order, items) = sample_order();
        let email = render_order_confirmation(&order, &items);
        assert_eq!(email.subject, format!("Order confirmation {}", order.id));
        assert!(email.text.contains("Hello Ann Riva"));
        assert!(email.text.contains("3 x Exhibition catalog - €75.00"));
        assert!(email.text.contains("Total: €75.00"));
        assert!(email.text.contains("Courier to 3 Mill Lane"));
        assert!(email.text.contains("Comment: leave at the door"));
    }

    #[test]
    fn test_admin_notification_contains_contact_details() {
        let (order, items) = sample_order();
        let email = render_admin_notification(&order, &items);
        assert_eq!(email.subject, format!("New order {}", order.id));
        assert!(email.text.contains("Ann Riva <ann@example.com>"));
        assert!(email.text.contains("Phone: +4915550000"));
        assert!(email.text.contains("Total: €75.00"));
    }

    #[test]
    fn test_pickup_delivery_is_rendered() {
        let point_id = Uuid::new_v4();
        let order = Order::new(
            "Bo",
            "bo@example.com",
            DeliveryMethod::Pickup {
                pickup_point_id: point_id,
            },
            2_500,
        );
        let email = render_order_confirmation(&order, &[]);
        assert!(email.text.contains(&format!("Pickup at point {}", point_id)));
    }
}
