//! Recursive descent parser for GraphQL executable documents.
//!
//! Each grammar production has a `parse_*` method on [`DocumentParser`].
//! Productions with alternatives resolve by ordered alternation: every
//! alternative is attempted from the same cursor snapshot, the cursor is
//! restored between failed attempts, and the first fully successful
//! alternative wins. The attempt order is semantically load-bearing and
//! documented (and tested) per production. For example the integer
//! alternative of a value runs before the float alternative, and defers
//! to it when the literal turns out to carry a fraction or exponent.
//!
//! Ignored tokens (whitespace, line terminators, comments, commas) may
//! appear between any two tokens; productions skip them at each seam via
//! [`skip_ignored`](crate::trivia).

use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::ExecutableDefinition;
use crate::ast::ExecutableDocument;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::ObjectField;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::Type;
use crate::ast::TypeCondition;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::numeric;
use crate::numeric::IntParser;
use crate::trivia::skip_ignored;
use crate::Const;
use crate::Constness;
use crate::ParseError;
use crate::SourceCursor;
use crate::VarAllowed;

/// Parses a complete executable document from UTF-8 source text.
///
/// This is the top-level entry point: leading and trailing trivia are
/// permitted, definitions are separated by trivia, and any failure aborts
/// the whole parse; a partial document is never returned.
///
/// # Example
///
/// ```
/// use gqlread_parser::parse_executable_document;
///
/// let document = parse_executable_document("query { hero { name } }")?;
/// assert_eq!(document.definitions.len(), 1);
/// # Ok::<(), gqlread_parser::ParseError>(())
/// ```
pub fn parse_executable_document(source: &str) -> Result<ExecutableDocument, ParseError> {
    DocumentParser::new(source).parse_document()
}

/// A backtracking recursive descent parser over a [`SourceCursor`].
///
/// The parser holds no state beyond the cursor and a recursion depth
/// counter; every `parse_*` method is a pure function from a cursor
/// position to a node plus an advanced cursor, or an error.
pub struct DocumentParser<'src> {
    cursor: SourceCursor<'src>,

    /// Current nesting depth for recursive productions (values, types,
    /// selection sets). Deeply nested input otherwise recurses with
    /// call-stack depth proportional to nesting.
    recursion_depth: usize,
}

impl<'src> DocumentParser<'src> {
    /// Maximum nesting depth for recursive productions.
    ///
    /// Far beyond any realistic document while keeping adversarial
    /// inputs like `[[[[[...` from exhausting the call stack, even in
    /// debug builds with large un-optimized frames.
    const MAX_RECURSION_DEPTH: usize = 64;

    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: SourceCursor::new(source),
            recursion_depth: 0,
        }
    }

    // =========================================================================
    // Document & definitions
    // =========================================================================

    /// `ExecutableDocument: ExecutableDefinition*`
    pub fn parse_document(mut self) -> Result<ExecutableDocument, ParseError> {
        let mut definitions = Vec::new();
        loop {
            skip_ignored(&mut self.cursor);
            if self.cursor.at_eof() {
                break;
            }
            definitions.push(self.parse_executable_definition()?);
        }
        Ok(ExecutableDocument { definitions })
    }

    /// `ExecutableDefinition: OperationDefinition | FragmentDefinition`
    ///
    /// The leading keyword makes the two unambiguous, so this dispatches
    /// on it rather than trying both alternatives.
    pub(crate) fn parse_executable_definition(
        &mut self,
    ) -> Result<ExecutableDefinition, ParseError> {
        skip_ignored(&mut self.cursor);
        let save = self.cursor.snapshot();
        let keyword = self.parse_name()?;
        self.cursor.restore(save);

        match keyword.as_str() {
            "query" | "mutation" | "subscription" => {
                Ok(ExecutableDefinition::Operation(self.parse_operation_definition()?))
            }
            "fragment" => Ok(ExecutableDefinition::Fragment(self.parse_fragment_definition()?)),
            _ => Err(ParseError::expected(
                "executable definition (`query`, `mutation`, `subscription`, or `fragment`)",
                self.cursor.position(),
            )),
        }
    }

    /// `OperationDefinition:
    ///    OperationType Name? VariableDefinitions? Directives? SelectionSet`
    pub(crate) fn parse_operation_definition(
        &mut self,
    ) -> Result<OperationDefinition, ParseError> {
        skip_ignored(&mut self.cursor);
        let operation = self.parse_operation_type()?;

        let save = self.cursor.snapshot();
        skip_ignored(&mut self.cursor);
        let name = match self.parse_name() {
            Ok(name) => Some(name),
            Err(_) => {
                self.cursor.restore(save);
                None
            }
        };

        let variable_definitions = self.parse_optional_variable_definitions()?;
        let directives = self.parse_directives::<VarAllowed>()?;
        let selection_set = self.parse_selection_set()?;

        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    /// `OperationType: query | mutation | subscription`
    pub(crate) fn parse_operation_type(&mut self) -> Result<OperationType, ParseError> {
        let save = self.cursor.snapshot();
        let position = self.cursor.position();
        let keyword = self.parse_name()?;
        match keyword.as_str() {
            "query" => Ok(OperationType::Query),
            "mutation" => Ok(OperationType::Mutation),
            "subscription" => Ok(OperationType::Subscription),
            _ => {
                self.cursor.restore(save);
                Err(ParseError::expected(
                    "operation type (`query`, `mutation`, or `subscription`)",
                    position,
                ))
            }
        }
    }

    /// `FragmentDefinition:
    ///    fragment FragmentName TypeCondition Directives? SelectionSet`
    pub(crate) fn parse_fragment_definition(
        &mut self,
    ) -> Result<FragmentDefinition, ParseError> {
        skip_ignored(&mut self.cursor);
        self.parse_keyword("fragment")?;
        skip_ignored(&mut self.cursor);
        let name = self.parse_fragment_name()?;
        skip_ignored(&mut self.cursor);
        let type_condition = self.parse_type_condition()?;
        let directives = self.parse_directives::<VarAllowed>()?;
        let selection_set = self.parse_selection_set()?;

        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    /// `SelectionSet: { Selection+ }`
    ///
    /// At least one selection is required; `{}` is a parse error.
    pub(crate) fn parse_selection_set(&mut self) -> Result<SelectionSet, ParseError> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_inner();
        self.recursion_depth -= 1;
        result
    }

    fn parse_selection_set_inner(&mut self) -> Result<SelectionSet, ParseError> {
        skip_ignored(&mut self.cursor);
        let open_position = self.cursor.position();
        if !self.cursor.eat_char('{') {
            return Err(ParseError::expected("`{`", open_position));
        }

        let mut selections = Vec::new();
        loop {
            skip_ignored(&mut self.cursor);
            if self.cursor.eat_char('}') {
                break;
            }
            if self.cursor.at_eof() {
                return Err(ParseError::expected("`}`", self.cursor.position()));
            }
            selections.push(self.parse_selection()?);
        }

        if selections.is_empty() {
            return Err(ParseError::expected(
                "at least one selection",
                open_position,
            ));
        }

        Ok(SelectionSet { selections })
    }

    /// `Selection: Field | FragmentSpread | InlineFragment`
    ///
    /// Spreads and inline fragments both start with `...`; everything
    /// else is a field. Within the `...` alternatives, the spread's
    /// name-not-`on` rule and the inline fragment's `on`/`{` keep the
    /// two unambiguous, so the spread is tried first and the cursor
    /// restored if it fails.
    pub(crate) fn parse_selection(&mut self) -> Result<Selection, ParseError> {
        skip_ignored(&mut self.cursor);
        if !self.cursor.rest().starts_with("...") {
            return Ok(Selection::Field(self.parse_field()?));
        }

        let save = self.cursor.snapshot();
        match self.parse_fragment_spread() {
            Ok(spread) => Ok(Selection::FragmentSpread(spread)),
            Err(_) => {
                self.cursor.restore(save);
                Ok(Selection::InlineFragment(self.parse_inline_fragment()?))
            }
        }
    }

    /// `Field: Alias? Name Arguments? Directives? SelectionSet?`
    pub(crate) fn parse_field(&mut self) -> Result<Field, ParseError> {
        skip_ignored(&mut self.cursor);

        // `Alias: Name :`, backtracked away when no colon follows.
        let save = self.cursor.snapshot();
        let alias = match self.parse_name() {
            Ok(name) => {
                skip_ignored(&mut self.cursor);
                if self.cursor.eat_char(':') {
                    Some(name)
                } else {
                    self.cursor.restore(save);
                    None
                }
            }
            Err(_) => {
                self.cursor.restore(save);
                None
            }
        };

        skip_ignored(&mut self.cursor);
        let name = self.parse_name()?;
        let arguments = self.parse_optional_arguments::<VarAllowed>()?;
        let directives = self.parse_directives::<VarAllowed>()?;

        let save = self.cursor.snapshot();
        skip_ignored(&mut self.cursor);
        let selection_set = if self.cursor.peek() == Some('{') {
            Some(self.parse_selection_set()?)
        } else {
            self.cursor.restore(save);
            None
        };

        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    /// `FragmentSpread: ... FragmentName Directives?`
    pub(crate) fn parse_fragment_spread(&mut self) -> Result<FragmentSpread, ParseError> {
        skip_ignored(&mut self.cursor);
        if !self.cursor.eat_str("...") {
            return Err(ParseError::expected("`...`", self.cursor.position()));
        }
        skip_ignored(&mut self.cursor);
        let name = self.parse_fragment_name()?;
        let directives = self.parse_directives::<VarAllowed>()?;
        Ok(FragmentSpread { name, directives })
    }

    /// `InlineFragment: ... TypeCondition? Directives? SelectionSet`
    pub(crate) fn parse_inline_fragment(&mut self) -> Result<InlineFragment, ParseError> {
        skip_ignored(&mut self.cursor);
        if !self.cursor.eat_str("...") {
            return Err(ParseError::expected("`...`", self.cursor.position()));
        }

        let save = self.cursor.snapshot();
        skip_ignored(&mut self.cursor);
        let type_condition = match self.parse_type_condition() {
            Ok(condition) => Some(condition),
            Err(_) => {
                self.cursor.restore(save);
                None
            }
        };

        let directives = self.parse_directives::<VarAllowed>()?;
        let selection_set = self.parse_selection_set()?;

        Ok(InlineFragment {
            type_condition,
            directives,
            selection_set,
        })
    }

    /// `TypeCondition: on NamedType`
    pub(crate) fn parse_type_condition(&mut self) -> Result<TypeCondition, ParseError> {
        skip_ignored(&mut self.cursor);
        self.parse_keyword("on")?;
        skip_ignored(&mut self.cursor);
        let name = self.parse_named_type()?;
        Ok(TypeCondition { name })
    }

    // =========================================================================
    // Variable definitions & types
    // =========================================================================

    /// `VariableDefinitions: ( VariableDefinition* )`, or `None` when the
    /// next token is not `(`.
    fn parse_optional_variable_definitions(
        &mut self,
    ) -> Result<Option<Vec<VariableDefinition>>, ParseError> {
        let save = self.cursor.snapshot();
        skip_ignored(&mut self.cursor);
        if !self.cursor.eat_char('(') {
            self.cursor.restore(save);
            return Ok(None);
        }

        let mut definitions = Vec::new();
        loop {
            skip_ignored(&mut self.cursor);
            if self.cursor.eat_char(')') {
                break;
            }
            if self.cursor.at_eof() {
                return Err(ParseError::expected("`)`", self.cursor.position()));
            }
            definitions.push(self.parse_variable_definition()?);
        }
        Ok(Some(definitions))
    }

    /// `VariableDefinition: Variable : Type DefaultValue? Directives?`
    ///
    /// The default value and the directives are const positions.
    pub(crate) fn parse_variable_definition(
        &mut self,
    ) -> Result<VariableDefinition, ParseError> {
        skip_ignored(&mut self.cursor);
        let variable = self.parse_variable()?;
        skip_ignored(&mut self.cursor);
        if !self.cursor.eat_char(':') {
            return Err(ParseError::expected("`:`", self.cursor.position()));
        }
        let ty = self.parse_type()?;

        let save = self.cursor.snapshot();
        skip_ignored(&mut self.cursor);
        let default_value = if self.cursor.eat_char('=') {
            Some(self.parse_value::<Const>()?)
        } else {
            self.cursor.restore(save);
            None
        };

        let directives = self.parse_directives::<Const>()?;

        Ok(VariableDefinition {
            variable,
            ty,
            default_value,
            directives,
        })
    }

    /// `Type: NamedType | ListType | NonNullType`
    ///
    /// Trial order: non-null first (a named-or-list type immediately
    /// followed by `!`), then the bare named-or-list type. The non-null
    /// production only wraps a named or list inner type, so `!!` cannot
    /// be produced.
    pub(crate) fn parse_type(&mut self) -> Result<Type, ParseError> {
        self.enter_recursion()?;
        let result = self.parse_type_inner();
        self.recursion_depth -= 1;
        result
    }

    fn parse_type_inner(&mut self) -> Result<Type, ParseError> {
        skip_ignored(&mut self.cursor);
        let save = self.cursor.snapshot();

        if let Ok(inner) = self.parse_named_or_list_type() {
            if self.cursor.eat_char('!') {
                return Ok(Type::NonNull(Box::new(inner)));
            }
        }

        self.cursor.restore(save);
        self.parse_named_or_list_type()
    }

    fn parse_named_or_list_type(&mut self) -> Result<Type, ParseError> {
        if self.cursor.eat_char('[') {
            let inner = self.parse_type()?;
            skip_ignored(&mut self.cursor);
            if !self.cursor.eat_char(']') {
                return Err(ParseError::expected("`]`", self.cursor.position()));
            }
            Ok(Type::List(Box::new(inner)))
        } else {
            Ok(Type::Named(self.parse_named_type()?))
        }
    }

    pub(crate) fn parse_named_type(&mut self) -> Result<NamedType, ParseError> {
        let name = self.parse_name()?;
        Ok(NamedType { name })
    }

    // =========================================================================
    // Directives & arguments
    // =========================================================================

    /// `Directives: Directive+`, or `None` when the next token is not
    /// `@`; absence of directives and "wrong next token" are the same
    /// outcome wherever directives are optional.
    pub(crate) fn parse_directives<C: Constness>(
        &mut self,
    ) -> Result<Option<Vec<Directive<C>>>, ParseError> {
        let save = self.cursor.snapshot();
        skip_ignored(&mut self.cursor);
        if self.cursor.peek() != Some('@') {
            self.cursor.restore(save);
            return Ok(None);
        }

        let mut directives = Vec::new();
        loop {
            directives.push(self.parse_directive::<C>()?);
            let save = self.cursor.snapshot();
            skip_ignored(&mut self.cursor);
            if self.cursor.peek() == Some('@') {
                continue;
            }
            self.cursor.restore(save);
            break;
        }
        Ok(Some(directives))
    }

    /// `Directive: @ Name Arguments?`
    pub(crate) fn parse_directive<C: Constness>(&mut self) -> Result<Directive<C>, ParseError> {
        skip_ignored(&mut self.cursor);
        if !self.cursor.eat_char('@') {
            return Err(ParseError::expected("`@`", self.cursor.position()));
        }
        let name = self.parse_name()?;
        let arguments = self.parse_optional_arguments::<C>()?;
        Ok(Directive { name, arguments })
    }

    /// `Arguments: ( Argument+ )`, or `None` when the next token is not
    /// `(`. Zero arguments between the parentheses is a grammar error.
    fn parse_optional_arguments<C: Constness>(
        &mut self,
    ) -> Result<Option<Vec<Argument<C>>>, ParseError> {
        let save = self.cursor.snapshot();
        skip_ignored(&mut self.cursor);
        if !self.cursor.eat_char('(') {
            self.cursor.restore(save);
            return Ok(None);
        }

        let mut arguments = vec![self.parse_argument::<C>()?];
        loop {
            skip_ignored(&mut self.cursor);
            if self.cursor.eat_char(')') {
                break;
            }
            if self.cursor.at_eof() {
                return Err(ParseError::expected("`)`", self.cursor.position()));
            }
            arguments.push(self.parse_argument::<C>()?);
        }
        Ok(Some(arguments))
    }

    /// `Argument: Name : Value`
    pub(crate) fn parse_argument<C: Constness>(&mut self) -> Result<Argument<C>, ParseError> {
        skip_ignored(&mut self.cursor);
        let name = self.parse_name()?;
        skip_ignored(&mut self.cursor);
        if !self.cursor.eat_char(':') {
            return Err(ParseError::expected("`:`", self.cursor.position()));
        }
        let value = self.parse_value::<C>()?;
        Ok(Argument { name, value })
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// `Value: Variable | IntValue | FloatValue | BooleanValue |
    ///  NullValue | EnumValue | ListValue | ObjectValue | StringValue`
    ///
    /// Trial order as listed, with the variable alternative only in
    /// variable-legal positions. The order is load-bearing: the integer
    /// alternative defers to the float alternative on a fraction or
    /// exponent, and the `true`/`false`/`null` keywords must win before
    /// the enum alternative sees them. Lists, objects, and strings have
    /// unambiguous opening tokens, so those alternatives commit once the
    /// opener is seen.
    pub(crate) fn parse_value<C: Constness>(&mut self) -> Result<Value<C>, ParseError> {
        self.enter_recursion()?;
        let result = self.parse_value_inner::<C>();
        self.recursion_depth -= 1;
        result
    }

    fn parse_value_inner<C: Constness>(&mut self) -> Result<Value<C>, ParseError> {
        skip_ignored(&mut self.cursor);
        let save = self.cursor.snapshot();
        let position = self.cursor.position();

        // Variable, only where the grammar position allows one.
        if let Ok(variable) = self.parse_variable() {
            if let Some(variable) = C::lift_variable(variable) {
                return Ok(Value::Variable(variable));
            }
        }
        self.cursor.restore(save);

        // Int, deferring to Float on `.`/`e`/`E`.
        match IntParser::new().parse::<i64>(&mut self.cursor) {
            Ok(int) => return Ok(Value::Int(int)),
            Err(ParseError::Failed { .. }) => {
                // The literal overflowed `i64` but still reads as a
                // number; take it as a (rounded) float rather than
                // letting the digit run match the enum alternative.
                self.cursor.restore(save);
                return numeric::parse_overflowing_float(&mut self.cursor).map(Value::Float);
            }
            Err(ParseError::ExpectedInput { .. }) => {}
        }
        self.cursor.restore(save);

        if let Ok(float) = numeric::parse_float(&mut self.cursor) {
            return Ok(Value::Float(float));
        }
        self.cursor.restore(save);

        if self.parse_keyword("true").is_ok() {
            return Ok(Value::Boolean(true));
        }
        self.cursor.restore(save);
        if self.parse_keyword("false").is_ok() {
            return Ok(Value::Boolean(false));
        }
        self.cursor.restore(save);

        if self.parse_keyword("null").is_ok() {
            return Ok(Value::Null);
        }
        self.cursor.restore(save);

        if let Ok(name) = self.parse_enum_name() {
            return Ok(Value::Enum(name));
        }
        self.cursor.restore(save);

        match self.cursor.peek() {
            Some('[') => return self.parse_list_value::<C>(),
            Some('{') => return self.parse_object_value::<C>().map(Value::Object),
            Some('"') => return self.parse_string_literal().map(Value::String),
            _ => {}
        }

        Err(ParseError::expected("value", position))
    }

    /// `ListValue: [ Value* ]`
    fn parse_list_value<C: Constness>(&mut self) -> Result<Value<C>, ParseError> {
        if !self.cursor.eat_char('[') {
            return Err(ParseError::expected("`[`", self.cursor.position()));
        }
        let mut values = Vec::new();
        loop {
            skip_ignored(&mut self.cursor);
            if self.cursor.eat_char(']') {
                break;
            }
            if self.cursor.at_eof() {
                return Err(ParseError::expected("`]`", self.cursor.position()));
            }
            values.push(self.parse_value::<C>()?);
        }
        Ok(Value::List(values))
    }

    /// `ObjectValue: { ObjectField* }`
    fn parse_object_value<C: Constness>(&mut self) -> Result<ObjectValue<C>, ParseError> {
        skip_ignored(&mut self.cursor);
        if !self.cursor.eat_char('{') {
            return Err(ParseError::expected("`{`", self.cursor.position()));
        }
        let mut fields = Vec::new();
        loop {
            skip_ignored(&mut self.cursor);
            if self.cursor.eat_char('}') {
                break;
            }
            if self.cursor.at_eof() {
                return Err(ParseError::expected("`}`", self.cursor.position()));
            }
            fields.push(self.parse_object_field::<C>()?);
        }
        Ok(ObjectValue { fields })
    }

    /// `ObjectField: Name : Value`
    fn parse_object_field<C: Constness>(&mut self) -> Result<ObjectField<C>, ParseError> {
        skip_ignored(&mut self.cursor);
        let name = self.parse_name()?;
        skip_ignored(&mut self.cursor);
        if !self.cursor.eat_char(':') {
            return Err(ParseError::expected("`:`", self.cursor.position()));
        }
        let value = self.parse_value::<C>()?;
        Ok(ObjectField { name, value })
    }

    /// `StringValue`, with the standard escape set and `\uXXXX`.
    pub(crate) fn parse_string_literal(&mut self) -> Result<String, ParseError> {
        if !self.cursor.eat_char('"') {
            return Err(ParseError::expected("`\"`", self.cursor.position()));
        }

        let mut out = String::new();
        loop {
            match self.cursor.bump() {
                None => {
                    return Err(ParseError::expected("closing `\"`", self.cursor.position()));
                }
                Some('"') => break,
                Some('\\') => out.push(self.parse_string_escape()?),
                Some(ch) if (ch as u32) < 0x20 => {
                    // Control characters (line terminators included) must
                    // be escaped inside a string literal.
                    return Err(ParseError::expected("closing `\"`", self.cursor.position()));
                }
                Some(ch) => out.push(ch),
            }
        }
        Ok(out)
    }

    fn parse_string_escape(&mut self) -> Result<char, ParseError> {
        let position = self.cursor.position();
        match self.cursor.bump() {
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('b') => Ok('\u{8}'),
            Some('f') => Ok('\u{c}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => {
                let mut code_point = 0u32;
                for _ in 0..4 {
                    let digit = self
                        .cursor
                        .bump()
                        .and_then(|ch| ch.to_digit(16))
                        .ok_or_else(|| {
                            ParseError::expected("4 hex digits", self.cursor.position())
                        })?;
                    code_point = code_point * 16 + digit;
                }
                char::from_u32(code_point).ok_or_else(|| ParseError::Failed {
                    summary: "failed to parse string escape".to_string(),
                    label: format!("`\\u{code_point:04X}` is not a Unicode scalar value"),
                    from: position,
                    snippet: self.cursor.snippet().to_string(),
                })
            }
            _ => Err(ParseError::expected("escape character", position)),
        }
    }

    // =========================================================================
    // Names & primitives
    // =========================================================================

    /// `Name: /[0-9A-Za-z_]+/`
    pub(crate) fn parse_name(&mut self) -> Result<Name, ParseError> {
        let save = self.cursor.snapshot();
        while matches!(self.cursor.peek(), Some(ch) if is_name_char(ch)) {
            self.cursor.bump();
        }
        let text = self.cursor.consumed_since(&save);
        if text.is_empty() {
            Err(ParseError::expected("name", self.cursor.position()))
        } else {
            Ok(Name::new(text))
        }
    }

    /// `FragmentName: Name but not `on``
    ///
    /// Re-fails without consuming when the matched name is `on`.
    pub(crate) fn parse_fragment_name(&mut self) -> Result<Name, ParseError> {
        let save = self.cursor.snapshot();
        let position = self.cursor.position();
        let name = self.parse_name()?;
        if name.as_str() == "on" {
            self.cursor.restore(save);
            Err(ParseError::expected("fragment name other than `on`", position))
        } else {
            Ok(name)
        }
    }

    /// `EnumValue: Name but not `true`, `false`, or `null``
    pub(crate) fn parse_enum_name(&mut self) -> Result<Name, ParseError> {
        let save = self.cursor.snapshot();
        let position = self.cursor.position();
        let name = self.parse_name()?;
        match name.as_str() {
            "true" | "false" | "null" => {
                self.cursor.restore(save);
                Err(ParseError::expected(
                    "enum value other than `true`/`false`/`null`",
                    position,
                ))
            }
            _ => Ok(name),
        }
    }

    /// `Variable: $ Name`
    pub(crate) fn parse_variable(&mut self) -> Result<Variable, ParseError> {
        if !self.cursor.eat_char('$') {
            return Err(ParseError::expected("`$`", self.cursor.position()));
        }
        let name = self.parse_name()?;
        Ok(Variable { name })
    }

    /// Consumes `keyword` as a whole name; `truex` does not match
    /// `true`.
    fn parse_keyword(&mut self, keyword: &str) -> Result<(), ParseError> {
        let save = self.cursor.snapshot();
        let position = self.cursor.position();
        let name = self.parse_name()?;
        if name.as_str() == keyword {
            Ok(())
        } else {
            self.cursor.restore(save);
            Err(ParseError::expected(format!("`{keyword}`"), position))
        }
    }

    fn enter_recursion(&mut self) -> Result<(), ParseError> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            return Err(ParseError::Failed {
                summary: "failed to parse document".to_string(),
                label: format!(
                    "nesting exceeds the maximum depth of {}",
                    Self::MAX_RECURSION_DEPTH
                ),
                from: self.cursor.position(),
                snippet: self.cursor.snippet().to_string(),
            });
        }
        self.recursion_depth += 1;
        Ok(())
    }
}

/// Name characters: `[0-9A-Za-z_]`.
fn is_name_char(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}
