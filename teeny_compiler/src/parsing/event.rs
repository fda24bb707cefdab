//! Parse events.
use smol_str::SmolStr;

/// Grammar production recognised by the parser.
///
/// Events are reported in source order, while the parser is still
/// inside the production. Expressions are flattened into their
/// operands and operators, which is enough for a target whose
/// expression syntax follows the same precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ProgramStart,
    ProgramEnd,
    /// First use of a variable.
    Declare(SmolStr),
    /// `PRINT` of a string literal.
    PrintText(SmolStr),
    /// `PRINT` of an expression, which follows as
    /// operand and operator events.
    PrintExprStart,
    PrintExprEnd,
    /// Condition of an `IF` follows.
    IfStart,
    /// Condition of a `WHILE` follows.
    WhileStart,
    /// Condition is done, statements of the block follow.
    BodyStart,
    /// End of an `IF` or `WHILE` block.
    BodyEnd,
    Label(SmolStr),
    Goto(SmolStr),
    /// `LET` assignment, with the expression following.
    AssignStart(SmolStr),
    AssignEnd,
    Input(SmolStr),
    /// Arithmetic, sign or comparison operator.
    Operator(SmolStr),
    Number(SmolStr),
    /// Variable read inside an expression.
    Variable(SmolStr),
}

/// Receiver of parse events.
pub trait EventSink {
    fn event(&mut self, event: Event);
}

/// Recording sink, so events can be replayed into another sink later.
impl EventSink for Vec<Event> {
    #[inline]
    fn event(&mut self, event: Event) {
        self.push(event)
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    #[inline]
    fn event(&mut self, event: Event) {
        (**self).event(event)
    }
}

/// Feed recorded events into a sink.
pub fn replay<S: EventSink>(events: impl IntoIterator<Item = Event>, sink: &mut S) {
    for event in events {
        sink.event(event);
    }
}
