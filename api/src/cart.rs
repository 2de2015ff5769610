//! Cart entries handed from the shopping views into checkout.

use serde::Deserialize;
use serde::Serialize;

/// A product entry in the shopper's cart.
///
/// Supplied by the catalog/cart views and treated as read-only by checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// URI of the product image.
    pub image: String,
}

impl CartItem {
    /// Renders the price the way the order service expects it: the shortest
    /// decimal that round-trips (`10.0` becomes `"10"`).
    pub fn price_string(&self) -> String {
        self.price.to_string()
    }
}

/// State carried along with a navigation into the checkout view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    #[serde(default)]
    pub items: Option<Vec<CartItem>>,
}

impl NavigationState {
    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self { items: Some(items) }
    }

    /// Copies the carried cart out of an optional navigation state.
    ///
    /// A missing state, or one without `items`, yields an empty cart.
    pub fn cart_items(state: Option<&NavigationState>) -> Vec<CartItem> {
        match state.and_then(|s| s.items.as_ref()) {
            Some(items) => {
                dioxus_logger::tracing::info!("checkout cart hydrated with {} item(s)", items.len());
                items.clone()
            }
            None => Vec::new(),
        }
    }

    /// Consumes the navigation state, leaving `None` behind, and returns its
    /// cart. A later visit without fresh state starts from an empty cart.
    pub fn take_cart_items(state: &mut Option<NavigationState>) -> Vec<CartItem> {
        Self::cart_items(state.take().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, price: f64) -> CartItem {
        CartItem {
            title: title.to_string(),
            price,
            description: "desc".to_string(),
            category: "misc".to_string(),
            image: "https://img.example/1.png".to_string(),
        }
    }

    #[test]
    fn price_string_uses_shortest_form() {
        assert_eq!(item("a", 109.95).price_string(), "109.95");
        assert_eq!(item("b", 10.0).price_string(), "10");
        assert_eq!(item("c", 0.5).price_string(), "0.5");
    }

    #[test]
    fn missing_state_gives_empty_cart() {
        assert!(NavigationState::cart_items(None).is_empty());
        assert!(NavigationState::cart_items(Some(&NavigationState::default())).is_empty());
    }

    #[test]
    fn carried_items_are_copied() {
        let state = NavigationState::with_items(vec![item("a", 1.0), item("b", 2.5)]);
        let cart = NavigationState::cart_items(Some(&state));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart[1].title, "b");
    }

    #[test]
    fn taking_the_cart_clears_the_state() {
        let mut state = Some(NavigationState::with_items(vec![item("a", 1.0)]));

        let cart = NavigationState::take_cart_items(&mut state);
        assert_eq!(cart.len(), 1);
        assert_eq!(state, None);

        assert!(NavigationState::take_cart_items(&mut state).is_empty());
    }

    #[test]
    fn navigation_state_parses_without_items() {
        let state: NavigationState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.items, None);

        let json = r#"{"items":[{"title":"Backpack","price":109.95,"description":"d","category":"bags","image":"i"}]}"#;
        let state: NavigationState = serde_json::from_str(json).unwrap();
        assert_eq!(state.items.unwrap()[0].price, 109.95);
    }
}
