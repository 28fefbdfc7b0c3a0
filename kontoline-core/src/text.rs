//! String helpers shared by the assembler and both extractors.

/// Terminator appended after every physical line during assembly.
pub const LINE_TERMINATOR: char = '\n';

/// Remove every line terminator, keeping all other characters in order.
pub fn strip_line_terminators(text: &str) -> String {
    text.chars().filter(|&c| c != LINE_TERMINATOR).collect()
}

/// Same as [`strip_line_terminators`], without allocating a new string.
pub fn strip_line_terminators_in_place(text: &mut String) {
    text.retain(|c| c != LINE_TERMINATOR);
}
