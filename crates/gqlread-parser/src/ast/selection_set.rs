use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;

/// A [selection set](https://spec.graphql.org/October2021/#sec-Selection-Sets):
/// `{ selection+ }`.
///
/// Selection order is preserved; it shapes the response and field
/// merging, even though this crate performs neither. A selection set
/// always carries at least one selection; `{}` is a parse error.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
}

/// One entry of a selection set.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
