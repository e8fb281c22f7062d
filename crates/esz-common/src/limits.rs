//! Centralized limits and thresholds for the esz front end.

/// Maximum nesting depth for recursive-descent parsing.
///
/// Each nested expression, statement or pattern adds frames to the call stack.
/// Past this depth the parser reports a syntax error. Below it, the stack is
/// grown on demand (see [`PARSER_STACK_RED_ZONE`]) so the host thread's stack
/// size does not matter.
///
/// ```javascript
/// // Deeply nested parentheses / arrays / blocks:
/// x = ((((((((((((((((((((((((1))))))))))))))))))))))));
/// ```
pub const MAX_PARSER_RECURSION_DEPTH: u32 = 1_000;

/// Slot count allocated by the first growth of an empty node list.
pub const NODE_LIST_INITIAL_CAPACITY: usize = 4;

/// Remaining stack below which a recursive production switches to a fresh
/// stack segment.
pub const PARSER_STACK_RED_ZONE: usize = 1024 * 1024;

/// Size of each stack segment allocated once the red zone is reached.
pub const PARSER_STACK_SEGMENT: usize = 8 * 1024 * 1024;
