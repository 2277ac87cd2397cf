//! Menu actions: the pickable entries of a battle menu tree.
//!
//! An [`Action`] is built once when a menu is assembled and never changes
//! afterwards. Picking a leaf converts it into a [`Selection`] snapshot via
//! [`Action::to_selection`].

use skirmish_core::handle::{ExecutorId, FighterId, MenuId, MoveId};

use super::selections::{MoveChoice, Selection};

/// The move, default target, and executor a leaf action hands to its
/// selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveBinding {
    /// The move to perform, if any.
    pub move_id: Option<MoveId>,
    /// The fighter the move is aimed at by default; becomes the selection's
    /// target.
    pub actor: Option<FighterId>,
    /// Alternate executor for the move.
    pub executor_override: Option<ExecutorId>,
}

/// Where picking an action leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionNode {
    /// An internal node that opens a child menu.
    SubMenu {
        /// The child menu.
        menu: MenuId,
    },
    /// A leaf that performs a move.
    Leaf(MoveBinding),
}

impl Default for ActionNode {
    fn default() -> Self {
        Self::Leaf(MoveBinding::default())
    }
}

/// One pickable menu entry, optionally carrying an item payload of type `T`.
///
/// Untyped actions use the default `T = ()` and are created with
/// [`Action::new`]; typed actions are created with [`Action::typed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action<T = ()> {
    display_text: String,
    command_text: String,
    alt_text: Option<String>,
    disabled: bool,
    hidden: bool,
    node: ActionNode,
    item: Option<T>,
}

impl Action {
    /// Creates an untyped leaf action with no move attached.
    #[must_use]
    pub fn new(display_text: impl Into<String>) -> Self {
        Self::without_item(display_text)
    }
}

impl<T> Action<T> {
    /// Creates an action carrying `item` through to its selection.
    #[must_use]
    pub fn typed(item: T, display_text: impl Into<String>) -> Self {
        Self::with_item(Some(item), display_text.into())
    }

    /// Creates an action of item type `T` that carries no item, such as a
    /// "Back" entry in a menu of typed entries. Its selection is basic.
    #[must_use]
    pub fn without_item(display_text: impl Into<String>) -> Self {
        Self::with_item(None, display_text.into())
    }

    fn with_item(item: Option<T>, display_text: String) -> Self {
        Self {
            command_text: display_text.clone(),
            display_text,
            alt_text: None,
            disabled: false,
            hidden: false,
            node: ActionNode::default(),
            item,
        }
    }

    /// Sets the command text. An empty string keeps the display text.
    #[must_use]
    pub fn with_command_text(mut self, command_text: impl Into<String>) -> Self {
        let command_text = command_text.into();
        if !command_text.is_empty() {
            self.command_text = command_text;
        }
        self
    }

    /// Sets the alternate text.
    #[must_use]
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    /// Marks the action as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Marks the action as hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Turns the action into an internal node opening `menu`.
    ///
    /// Any move binding set earlier is discarded.
    #[must_use]
    pub fn with_sub_menu(mut self, menu: MenuId) -> Self {
        self.node = ActionNode::SubMenu { menu };
        self
    }

    /// Sets the move and its default target, turning the action into a leaf.
    #[must_use]
    pub fn with_move(self, move_id: MoveId, actor: Option<FighterId>) -> Self {
        self.map_binding(|binding| {
            binding.move_id = Some(move_id);
            binding.actor = actor;
        })
    }

    /// Sets the default target without touching the move.
    #[must_use]
    pub fn with_actor(self, actor: FighterId) -> Self {
        self.map_binding(|binding| binding.actor = Some(actor))
    }

    /// Routes the move through `executor` instead of the default dispatch.
    #[must_use]
    pub fn with_executor_override(self, executor: ExecutorId) -> Self {
        self.map_binding(|binding| binding.executor_override = Some(executor))
    }

    // Internal nodes start from an empty binding.
    fn map_binding(mut self, update: impl FnOnce(&mut MoveBinding)) -> Self {
        let mut binding = self.binding();
        update(&mut binding);
        self.node = ActionNode::Leaf(binding);
        self
    }

    /// Text shown in the menu.
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Text used when the action is typed as a command.
    #[must_use]
    pub fn command_text(&self) -> &str {
        &self.command_text
    }

    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns the node kind of this action.
    #[must_use]
    pub fn node(&self) -> &ActionNode {
        &self.node
    }

    /// Returns the child menu for internal nodes.
    #[must_use]
    pub fn sub_menu(&self) -> Option<MenuId> {
        match self.node {
            ActionNode::SubMenu { menu } => Some(menu),
            ActionNode::Leaf(_) => None,
        }
    }

    /// Returns the move binding. Internal nodes have an empty binding.
    #[must_use]
    pub fn binding(&self) -> MoveBinding {
        match self.node {
            ActionNode::Leaf(binding) => binding,
            ActionNode::SubMenu { .. } => MoveBinding::default(),
        }
    }

    #[must_use]
    pub fn move_id(&self) -> Option<MoveId> {
        self.binding().move_id
    }

    #[must_use]
    pub fn actor(&self) -> Option<FighterId> {
        self.binding().actor
    }

    #[must_use]
    pub fn executor_override(&self) -> Option<ExecutorId> {
        self.binding().executor_override
    }

    /// Returns the item payload of a typed action.
    #[must_use]
    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }
}

impl<T: Clone> Action<T> {
    /// Converts this action into a selection snapshot.
    ///
    /// The description is the display text; move, actor and executor
    /// override are copied unchanged, with the actor becoming the target.
    /// Typed actions produce [`Selection::Typed`] carrying a clone of the
    /// item. Absent values are forwarded as-is.
    #[must_use]
    pub fn to_selection(&self) -> Selection<T> {
        let binding = self.binding();
        let choice = MoveChoice {
            description: self.display_text.clone(),
            move_id: binding.move_id,
            target: binding.actor,
            executor_override: binding.executor_override,
        };

        match &self.item {
            Some(item) => Selection::Typed {
                item: item.clone(),
                choice,
            },
            None => Selection::Basic(choice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selections::SelectionKind;

    #[test]
    fn test_new_action_defaults_command_text_to_display_text() {
        let action = Action::new("Attack");

        assert_eq!(action.display_text(), "Attack");
        assert_eq!(action.command_text(), "Attack");
        assert!(action.alt_text().is_none());
        assert!(!action.is_disabled());
        assert!(!action.is_hidden());
    }

    #[test]
    fn test_empty_command_text_keeps_display_text() {
        let action = Action::new("Defend").with_command_text("");

        assert_eq!(action.command_text(), "Defend");
    }

    #[test]
    fn test_explicit_command_text_is_kept() {
        let action = Action::typed("fireball-id", "Fireball 3").with_command_text("fireball");

        assert_eq!(action.command_text(), "fireball");
        assert_eq!(action.display_text(), "Fireball 3");
    }

    #[test]
    fn test_plain_action_converts_to_empty_basic_selection() {
        let selection = Action::new("Attack").to_selection();

        assert_eq!(selection.kind(), SelectionKind::Basic);
        assert_eq!(selection.description(), "Attack");
        assert!(selection.move_id().is_none());
        assert!(selection.target().is_none());
        assert!(selection.executor_override().is_none());
    }

    #[test]
    fn test_leaf_action_forwards_binding_into_selection() {
        let move_id = MoveId::new();
        let actor = FighterId::new();
        let executor = ExecutorId::new();
        let action = Action::new("Strike")
            .with_move(move_id, Some(actor))
            .with_executor_override(executor);

        let selection = action.to_selection();

        assert_eq!(selection.description(), "Strike");
        assert_eq!(selection.move_id(), Some(move_id));
        assert_eq!(selection.target(), Some(actor));
        assert_eq!(selection.executor_override(), Some(executor));
    }

    #[test]
    fn test_typed_action_converts_to_typed_selection() {
        let action = Action::typed("fireball-id", "Fireball 3").with_command_text("fireball");

        let selection = action.to_selection();

        assert_eq!(selection.kind(), SelectionKind::Typed);
        assert_eq!(selection.item(), Some(&"fireball-id"));
        assert_eq!(selection.description(), "Fireball 3");
    }

    #[test]
    fn test_typed_conversion_matches_untyped_choice() {
        let move_id = MoveId::new();
        let actor = FighterId::new();
        let untyped = Action::new("Potion").with_move(move_id, Some(actor));
        let typed = Action::typed(17_u32, "Potion").with_move(move_id, Some(actor));

        assert_eq!(typed.to_selection().choice(), untyped.to_selection().choice());
    }

    #[test]
    fn test_action_without_item_converts_to_basic_selection() {
        let action: Action<String> = Action::without_item("Back");

        let selection = action.to_selection();

        assert_eq!(selection.kind(), SelectionKind::Basic);
        assert!(selection.item().is_none());
    }

    #[test]
    fn test_to_selection_is_idempotent() {
        let action = Action::new("Guard").with_move(MoveId::new(), None);

        assert_eq!(action.to_selection(), action.to_selection());
    }

    #[test]
    fn test_sub_menu_action_has_no_binding() {
        let menu = MenuId::new();
        let action = Action::new("Skills").with_sub_menu(menu);

        assert_eq!(action.sub_menu(), Some(menu));
        assert_eq!(action.binding(), MoveBinding::default());
        assert!(action.to_selection().move_id().is_none());
    }

    #[test]
    fn test_with_move_replaces_sub_menu() {
        let move_id = MoveId::new();
        let action = Action::new("Skills")
            .with_sub_menu(MenuId::new())
            .with_move(move_id, None);

        assert!(action.sub_menu().is_none());
        assert_eq!(action.move_id(), Some(move_id));
    }

    #[test]
    fn test_with_sub_menu_discards_binding() {
        let action = Action::new("Items")
            .with_move(MoveId::new(), Some(FighterId::new()))
            .with_sub_menu(MenuId::new());

        assert!(action.move_id().is_none());
        assert!(action.actor().is_none());
    }

    #[test]
    fn test_flags_and_alt_text_are_kept() {
        let action = Action::new("Flee")
            .with_alt_text("Run away")
            .disabled()
            .hidden();

        assert_eq!(action.alt_text(), Some("Run away"));
        assert!(action.is_disabled());
        assert!(action.is_hidden());
    }

    #[test]
    fn test_conversion_leaves_action_unchanged() {
        let action = Action::typed(String::from("ether"), "Ether").with_move(MoveId::new(), None);
        let before = action.clone();

        let _ = action.to_selection();

        assert_eq!(action, before);
    }
}
