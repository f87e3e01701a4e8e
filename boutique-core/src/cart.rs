//! Cart-button state shared by the three rendered product lists.
//!
//! The catalog, popular and discount lists are fetched and rendered on their
//! own, and the same product id may appear in any of them. Every rendered
//! "add to cart" button for an id must agree with the persisted cart.
use serde::{Deserialize, Serialize};

/// One of the rendered product lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListId {
    Product,
    Popular,
    Discount,
}

impl ListId {
    /// Inspection order used when syncing buttons.
    pub const ALL: [Self; 3] = [Self::Product, Self::Popular, Self::Discount];

    /// Name of the storage list a rendered list reads its products from.
    #[must_use]
    pub const fn ls_name(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Popular => "popular",
            Self::Discount => "discount",
        }
    }

    #[must_use]
    pub fn from_ls_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|list| list.ls_name() == name)
    }

    const fn index(self) -> usize {
        match self {
            Self::Product => 0,
            Self::Popular => 1,
            Self::Discount => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CartState {
    InCart,
    #[default]
    NotInCart,
}

impl CartState {
    #[must_use]
    pub const fn is_in_cart(self) -> bool {
        matches!(self, Self::InCart)
    }
}

/// A click on an "add to cart" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartClick {
    pub list: ListId,
    pub product_id: String,
}

impl CartClick {
    #[must_use]
    pub fn new(list: ListId, product_id: impl Into<String>) -> Self {
        Self {
            list,
            product_id: product_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RenderedList {
    buttons: Vec<(String, CartState)>,
}

impl RenderedList {
    fn button_mut(&mut self, id: &str) -> Option<&mut CartState> {
        self.buttons
            .iter_mut()
            .find(|(rendered, _)| rendered == id)
            .map(|(_, state)| state)
    }

    fn button(&self, id: &str) -> Option<CartState> {
        self.buttons
            .iter()
            .find(|(rendered, _)| rendered == id)
            .map(|(_, state)| *state)
    }
}

/// Button state of every rendered card, per list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonBoard {
    lists: [RenderedList; 3],
}

impl ButtonBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cards of one list. Fresh buttons start out of the cart.
    pub fn render_list<I, T>(&mut self, list: ListId, ids: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.lists[list.index()].buttons = ids
            .into_iter()
            .map(|id| (id.into(), CartState::NotInCart))
            .collect();
    }

    /// Set the button for `id` in every list that renders it.
    /// Returns how many buttons were touched.
    pub fn set_cart_state_for_one_product(&mut self, id: &str, state: CartState) -> usize {
        let mut touched = 0;
        for list in ListId::ALL {
            if let Some(button) = self.lists[list.index()].button_mut(id) {
                *button = state;
                touched += 1;
            }
        }
        touched
    }

    /// Mark every cart id as added in every list that renders it.
    pub fn set_cart_state_for_all_products<I, T>(&mut self, cart_ids: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for id in cart_ids {
            self.set_cart_state_for_one_product(id.as_ref(), CartState::InCart);
        }
    }

    /// Button state in `list`, `None` if the id is not rendered there.
    #[must_use]
    pub fn state(&self, list: ListId, id: &str) -> Option<CartState> {
        self.lists[list.index()].button(id)
    }

    #[must_use]
    pub fn is_added(&self, list: ListId, id: &str) -> bool {
        self.state(list, id).is_some_and(CartState::is_in_cart)
    }

    #[must_use]
    pub fn rendered_ids(&self, list: ListId) -> Vec<&str> {
        self.lists[list.index()]
            .buttons
            .iter()
            .map(|(id, _)| id.as_str())
            .collect()
    }

    #[must_use]
    pub fn added_ids(&self, list: ListId) -> Vec<&str> {
        self.lists[list.index()]
            .buttons
            .iter()
            .filter(|(_, state)| state.is_in_cart())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Whether a click should add to the cart. Already-added buttons ignore clicks.
    #[must_use]
    pub fn accepts_click(&self, click: &CartClick) -> bool {
        !self.is_added(click.list, &click.product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> ButtonBoard {
        let mut board = ButtonBoard::new();
        board.render_list(ListId::Product, ["a", "b", "c"]);
        board.render_list(ListId::Popular, ["b", "d"]);
        board.render_list(ListId::Discount, ["c", "b"]);
        board
    }

    #[test]
    fn ls_names_round_trip() {
        for list in ListId::ALL {
            assert_eq!(ListId::from_ls_name(list.ls_name()), Some(list));
        }
        assert_eq!(ListId::from_ls_name("basket"), None);
    }

    #[test]
    fn one_product_updates_every_list_that_renders_it() {
        let mut board = board();
        assert_eq!(board.set_cart_state_for_one_product("b", CartState::InCart), 3);
        for list in ListId::ALL {
            assert!(board.is_added(list, "b"));
        }
        assert!(!board.is_added(ListId::Product, "a"));

        assert_eq!(board.set_cart_state_for_one_product("b", CartState::NotInCart), 3);
        assert!(board.added_ids(ListId::Popular).is_empty());
    }

    #[test]
    fn missing_ids_are_skipped() {
        let mut board = board();
        assert_eq!(board.set_cart_state_for_one_product("d", CartState::InCart), 1);
        assert_eq!(board.set_cart_state_for_one_product("zz", CartState::InCart), 0);
        assert_eq!(board.state(ListId::Product, "d"), None);
        assert_eq!(board.state(ListId::Popular, "d"), Some(CartState::InCart));
    }

    #[test]
    fn all_products_marks_cart_ids_only() {
        let mut board = board();
        board.set_cart_state_for_all_products(Vec::<String>::new());
        assert!(ListId::ALL.iter().all(|l| board.added_ids(*l).is_empty()));

        board.set_cart_state_for_all_products(["a", "c"]);
        assert_eq!(board.added_ids(ListId::Product), vec!["a", "c"]);
        assert_eq!(board.added_ids(ListId::Discount), vec!["c"]);
        assert!(board.added_ids(ListId::Popular).is_empty());
    }

    #[test]
    fn rerender_resets_buttons_of_that_list() {
        let mut board = board();
        board.set_cart_state_for_all_products(["b"]);
        board.render_list(ListId::Product, ["b", "e"]);
        assert!(!board.is_added(ListId::Product, "b"));
        assert!(board.is_added(ListId::Popular, "b"));
        assert_eq!(board.rendered_ids(ListId::Product), vec!["b", "e"]);
    }

    #[test]
    fn added_buttons_ignore_clicks() {
        let mut board = board();
        let click = CartClick::new(ListId::Discount, "c");
        assert!(board.accepts_click(&click));
        board.set_cart_state_for_one_product("c", CartState::InCart);
        assert!(!board.accepts_click(&click));
    }
}
