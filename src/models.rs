use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalog entry. Defined once at process start and never mutated or
/// persisted; orders carry denormalized snapshots instead of references.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub original_price: i64,
    pub image: String,
    pub images: Vec<String>,
    pub fabric: String,
    pub fit: String,
    pub description: String,
    pub sizes: Vec<i32>,
    pub rating: f64,
    pub reviews: i64,
}

/// One (product, size) entry of a cart, with the product's name, price and
/// image frozen at the time it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: i64,
    pub size: i32,
    pub quantity: i32,
    pub name: String,
    pub price: i64,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    // Argon2 hash; never sent back to clients.
    #[serde(skip_serializing)]
    pub password: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Admin-triggered transitions only. Terminal states accept nothing,
    /// and no path leads back to `pending`.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (*self, next),
            (Pending, Shipped | Delivered | Cancelled) | (Shipped, Delivered | Cancelled)
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placed purchase. Immutable after creation apart from `status`;
/// `items` is the cart snapshot taken at checkout, not a live reference.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub user_id: Option<i64>,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub total_amount: i64,
    pub items: Vec<CartLine>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Raw `orders` row; `items` and `status` are stored as text and parsed
/// into [`Order`] on the way out.
#[derive(Debug, sqlx::FromRow)]
pub struct OrderRow {
    pub id: i64,
    pub user_id: Option<i64>,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub total_amount: i64,
    pub items: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl OrderRow {
    pub fn into_order(self) -> anyhow::Result<Order> {
        let items: Vec<CartLine> = serde_json::from_str(&self.items)?;
        let status = OrderStatus::parse(&self.status)
            .ok_or_else(|| anyhow::anyhow!("unknown order status {:?}", self.status))?;
        Ok(Order {
            id: self.id,
            user_id: self.user_id,
            customer_name: self.customer_name,
            phone: self.phone,
            address: self.address,
            total_amount: self.total_amount,
            items,
            status,
            created_at: self.created_at,
        })
    }
}

/// Mirror an accepted status update onto an already-fetched listing so the
/// caller can skip a full re-fetch for a single-field change. Returns false
/// when no row matched, in which case a reconfirming fetch is the safer
/// move.
pub fn patch_order_status(orders: &mut [Order], order_id: i64, status: OrderStatus) -> bool {
    match orders.iter_mut().find(|o| o.id == order_id) {
        Some(order) => {
            order.status = status;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    #[test]
    fn forward_transitions_allowed() {
        assert!(Pending.can_transition_to(Shipped));
        assert!(Pending.can_transition_to(Delivered));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Shipped.can_transition_to(Delivered));
        assert!(Shipped.can_transition_to(Cancelled));
    }

    #[test]
    fn terminal_states_accept_nothing() {
        for next in [Pending, Shipped, Delivered, Cancelled] {
            assert!(!Delivered.can_transition_to(next));
            assert!(!Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn no_path_back_to_pending() {
        assert!(!Shipped.can_transition_to(Pending));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [Pending, Shipped, Delivered, Cancelled] {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("refunded"), None);
    }

    fn sample_order(id: i64) -> Order {
        Order {
            id,
            user_id: None,
            customer_name: "Rahim".into(),
            phone: "01700000000".into(),
            address: "Dhaka".into(),
            total_amount: 1110,
            items: vec![],
            status: Pending,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn patch_updates_matching_order_in_place() {
        let mut orders = vec![sample_order(1), sample_order(2)];
        assert!(patch_order_status(&mut orders, 2, Shipped));
        assert_eq!(orders[0].status, Pending);
        assert_eq!(orders[1].status, Shipped);
    }

    #[test]
    fn patch_signals_refetch_on_unknown_id() {
        let mut orders = vec![sample_order(1)];
        assert!(!patch_order_status(&mut orders, 99, Shipped));
        assert_eq!(orders[0].status, Pending);
    }

    #[test]
    fn order_row_parses_items_and_status() {
        let row = OrderRow {
            id: 7,
            user_id: Some(3),
            customer_name: "Karim".into(),
            phone: "01800000000".into(),
            address: "Chattogram".into(),
            total_amount: 2160,
            items: r#"[{"productId":1,"size":32,"quantity":2,"name":"Man's Formal Pant - Cream","price":1050,"image":"x.jpeg"}]"#.into(),
            status: "pending".into(),
            created_at: Utc::now(),
        };
        let order = row.into_order().unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.status, Pending);
    }
}
