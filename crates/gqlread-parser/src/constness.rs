//! Compile-time const/variable grammar parameterization.
//!
//! Several grammar positions differ only in whether a `$variable`
//! reference is legal inside a value: field arguments may carry
//! variables, while a variable definition's default value (and the
//! directives attached to it) must be fully literal. Rather than a
//! runtime flag, the distinction is a phantom type parameter: in a const
//! position the variable case of [`Value`](crate::ast::Value) holds an
//! uninhabited type, so a const value containing a variable cannot be
//! constructed at all.

use crate::ast::Variable;
use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Const {}
    impl Sealed for super::VarAllowed {}
}

/// The constness of a grammar position.
///
/// Implemented only by [`Const`] and [`VarAllowed`]; the trait is sealed.
pub trait Constness:
    sealed::Sealed + Copy + Clone + fmt::Debug + PartialEq + Eq + Hash + 'static
{
    /// The representation of a `$variable` reference at this position.
    ///
    /// Uninhabited ([`NoVariable`]) in const positions.
    type VariableRef: Clone + fmt::Debug + PartialEq + Eq + Hash;

    /// Wraps a parsed variable for this position, or `None` when
    /// variables are not legal here.
    fn lift_variable(variable: Variable) -> Option<Self::VariableRef>;
}

/// Marker for grammar positions that require fully literal values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Const {}

/// Marker for grammar positions where `$variable` references are legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VarAllowed {}

/// An uninhabited variable reference; makes `Value<Const>::Variable`
/// unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoVariable {}

impl Constness for Const {
    type VariableRef = NoVariable;

    fn lift_variable(_variable: Variable) -> Option<NoVariable> {
        None
    }
}

impl Constness for VarAllowed {
    type VariableRef = Variable;

    fn lift_variable(variable: Variable) -> Option<Variable> {
        Some(variable)
    }
}
