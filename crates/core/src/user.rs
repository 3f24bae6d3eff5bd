//! Users and their carts.
//!
//! A user is loaded from fixture data and never created or deleted at runtime.
//! Its cart is the only mutable state in the system.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CartError, CartResult};
use crate::id::{ProductId, Username};

/// Display name parts, as carried by the user fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonName {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
}

/// Credential pair plus the stable account identifier.
///
/// The password is an opaque string compared exactly; it is never written
/// back out in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub uuid: Uuid,
    pub username: Username,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Login {
    /// Exact, case-sensitive match on both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username.as_str() == username && self.password == password
    }
}

/// One line of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl CartItem {
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A user record.
///
/// # Invariants
/// - At most one cart item per product id once the cart has been touched by
///   [`User::upsert_item`].
/// - Items were valid against the catalog when inserted; nothing is checked
///   afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: PersonName,
    #[serde(default)]
    pub email: String,
    pub login: Login,
    #[serde(default)]
    pub cart: Vec<CartItem>,
}

impl User {
    pub fn username(&self) -> &Username {
        &self.login.username
    }

    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// First cart item for `product_id`, if any.
    pub fn cart_item(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.cart.iter().find(|item| &item.product_id == product_id)
    }

    /// Insert-or-update keyed by product id.
    ///
    /// The caller is responsible for checking the product against the catalog.
    pub fn upsert_item(&mut self, product_id: ProductId, quantity: i64) {
        match self.cart.iter_mut().find(|item| item.product_id == product_id) {
            Some(item) => item.quantity = quantity,
            None => self.cart.push(CartItem::new(product_id, quantity)),
        }
    }

    /// Overwrite the quantity of an existing item.
    ///
    /// Does not consult the catalog: an item whose product has since vanished
    /// can still be updated.
    pub fn set_item_quantity(&mut self, product_id: &ProductId, quantity: i64) -> CartResult<()> {
        let item = self
            .cart
            .iter_mut()
            .find(|item| &item.product_id == product_id)
            .ok_or_else(|| CartError::ItemNotInCart(product_id.clone()))?;
        item.quantity = quantity;
        Ok(())
    }

    /// Remove every item for `product_id`. Removing an absent item is a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.cart.retain(|item| &item.product_id != product_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            name: PersonName {
                title: "Mr".to_string(),
                first: "Jon".to_string(),
                last: "Doe".to_string(),
            },
            email: "jon@example.com".to_string(),
            login: Login {
                uuid: Uuid::nil(),
                username: Username::new("yellowleopard753"),
                password: "jonjon".to_string(),
            },
            cart: Vec::new(),
        }
    }

    fn pid(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn login_match_is_exact_and_case_sensitive() {
        let user = test_user();
        assert!(user.login.matches("yellowleopard753", "jonjon"));
        assert!(!user.login.matches("YellowLeopard753", "jonjon"));
        assert!(!user.login.matches("yellowleopard753", "JONJON"));
        assert!(!user.login.matches("yellowleopard753", "jonjon "));
    }

    #[test]
    fn upsert_appends_new_item() {
        let mut user = test_user();
        user.upsert_item(pid("1"), 2);
        assert_eq!(user.cart(), &[CartItem::new(pid("1"), 2)]);
    }

    #[test]
    fn upsert_overwrites_existing_quantity() {
        let mut user = test_user();
        user.upsert_item(pid("1"), 2);
        user.upsert_item(pid("2"), 1);
        user.upsert_item(pid("1"), 7);

        assert_eq!(
            user.cart(),
            &[CartItem::new(pid("1"), 7), CartItem::new(pid("2"), 1)]
        );
    }

    #[test]
    fn set_quantity_requires_existing_item() {
        let mut user = test_user();
        let err = user.set_item_quantity(&pid("1"), 3).unwrap_err();
        assert_eq!(err, CartError::ItemNotInCart(pid("1")));
        assert!(user.cart().is_empty());

        user.upsert_item(pid("1"), 2);
        user.set_item_quantity(&pid("1"), 3).unwrap();
        assert_eq!(user.cart_item(&pid("1")).unwrap().quantity, 3);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut user = test_user();
        user.upsert_item(pid("1"), 2);
        user.upsert_item(pid("2"), 1);

        user.remove_item(&pid("1"));
        let once = user.cart.clone();
        user.remove_item(&pid("1"));
        assert_eq!(user.cart, once);
        assert_eq!(user.cart(), &[CartItem::new(pid("2"), 1)]);
    }

    #[test]
    fn remove_drops_every_duplicate_from_fixture_data() {
        let mut user = test_user();
        user.cart = vec![CartItem::new(pid("1"), 1), CartItem::new(pid("1"), 4)];
        user.remove_item(&pid("1"));
        assert!(user.cart().is_empty());
    }

    #[test]
    fn serialized_user_omits_password() {
        let user = test_user();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["login"]["username"], "yellowleopard753");
        assert!(json["login"].get("password").is_none());
        assert!(json["cart"].as_array().unwrap().is_empty());
    }

    #[test]
    fn cart_items_use_camel_case_on_the_wire() {
        let json = serde_json::to_value(CartItem::new(pid("1"), 2)).unwrap();
        assert_eq!(json, serde_json::json!({ "productId": "1", "quantity": 2 }));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn op() -> impl Strategy<Value = (u8, String, i64)> {
            (0u8..3, "[1-5]", -5i64..50)
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: after any sequence of cart operations, product ids are unique.
            #[test]
            fn cart_never_holds_duplicate_product_ids(ops in prop::collection::vec(op(), 0..40)) {
                let mut user = test_user();
                for (kind, id, qty) in ops {
                    let id = ProductId::new(id);
                    match kind {
                        0 => user.upsert_item(id, qty),
                        1 => { let _ = user.set_item_quantity(&id, qty); }
                        _ => user.remove_item(&id),
                    }
                }

                let mut seen = std::collections::HashSet::new();
                for item in user.cart() {
                    prop_assert!(seen.insert(item.product_id.clone()));
                }
            }

            /// Property: upserting Q leaves exactly one entry for that id, with quantity Q.
            #[test]
            fn upsert_leaves_single_entry_with_last_quantity(
                first in -5i64..50,
                second in -5i64..50,
                id in "[1-5]",
            ) {
                let mut user = test_user();
                let id = ProductId::new(id);
                user.upsert_item(id.clone(), first);
                user.upsert_item(id.clone(), second);

                let matching: Vec<_> = user.cart().iter().filter(|i| i.product_id == id).collect();
                prop_assert_eq!(matching.len(), 1);
                prop_assert_eq!(matching[0].quantity, second);
            }

            /// Property: remove applied twice equals remove applied once.
            #[test]
            fn remove_twice_equals_once(ids in prop::collection::vec("[1-5]", 0..10), target in "[1-5]") {
                let mut user = test_user();
                for id in ids {
                    user.upsert_item(ProductId::new(id), 1);
                }
                let target = ProductId::new(target);

                user.remove_item(&target);
                let once = user.cart.clone();
                user.remove_item(&target);
                prop_assert_eq!(user.cart, once);
            }
        }
    }
}
