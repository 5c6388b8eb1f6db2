use std::collections::HashMap;

use log::debug;

use cnf_grammar::{Name, Production};
use cnf_symbol::NameInterner;

use crate::LoadError;

const ARROW: &str = "->";
const ALTERNATIVE: char = '|';
const COMMENT: char = '#';

/// A production together with the position of its line.
pub(crate) struct Located {
    pub(crate) line: u32,
    pub(crate) col: u32,
    pub(crate) production: Production,
}

pub(crate) struct Reader {
    interner: NameInterner,
    /// Where each name occurs first.
    positions: HashMap<Name, (u32, u32)>,
}

impl Reader {
    pub(crate) fn new() -> Self {
        Reader {
            interner: NameInterner::new(),
            positions: HashMap::new(),
        }
    }

    /// Returns the line and column where `name` occurs first.
    pub(crate) fn position(&self, name: &Name) -> Option<(u32, u32)> {
        self.positions.get(name).copied()
    }

    fn push(&mut self, symbols: &mut Vec<Name>, name: &str, line: u32, col: u32) {
        let name = self.interner.get_or_intern(name);
        self.positions.entry(name.clone()).or_insert((line, col));
        symbols.push(name);
    }

    pub(crate) fn productions(&mut self, text: &str) -> Result<Vec<Located>, LoadError> {
        let mut productions = vec![];
        for (i, line) in text.lines().enumerate() {
            self.line(i as u32 + 1, line, &mut productions)?;
        }
        debug!(
            "read {} productions with {} distinct names",
            productions.len(),
            self.interner.len()
        );
        Ok(productions)
    }

    fn line(&mut self, line_no: u32, line: &str, out: &mut Vec<Located>) -> Result<(), LoadError> {
        let content = line.trim_start();
        if content.is_empty() || content.starts_with(COMMENT) {
            return Ok(());
        }
        let col = column(line, line.len() - content.len());
        let arrow = line
            .find(ARROW)
            .ok_or_else(|| LoadError::new("expected `->`", line_no, col))?;
        let left = self.symbols(&line[..arrow], line_no, 1)?;
        let mut offset = arrow + ARROW.len();
        for alternative in line[offset..].split(ALTERNATIVE) {
            let production = match alternative.trim() {
                "" | "ε" | "λ" => Production::epsilon(left.clone()),
                _ => {
                    let right = self.symbols(alternative, line_no, column(line, offset))?;
                    Production::new(left.clone(), right)
                }
            };
            out.push(Located {
                line: line_no,
                col,
                production,
            });
            offset += alternative.len() + ALTERNATIVE.len_utf8();
        }
        Ok(())
    }

    /// Splits text into symbols. `line` and `col` give the position of the
    /// first character.
    pub(crate) fn symbols(
        &mut self,
        text: &str,
        mut line: u32,
        mut col: u32,
    ) -> Result<Vec<Name>, LoadError> {
        let mut symbols = vec![];
        let mut chars = text.chars();
        while let Some(ch) = chars.next() {
            let start = col;
            col += 1;
            match ch {
                '\n' => {
                    line += 1;
                    col = 1;
                }
                ch if ch.is_whitespace() => {}
                'ε' | 'λ' => {
                    return Err(LoadError::new(
                        format!("`{}` must stand alone", ch),
                        line,
                        start,
                    ))
                }
                '<' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('>') => break,
                            Some('\n') | None => {
                                return Err(LoadError::new("unclosed `<`", line, start))
                            }
                            Some(ch) => name.push(ch),
                        }
                        col += 1;
                    }
                    col += 1;
                    if name.is_empty() {
                        return Err(LoadError::new("empty symbol name", line, start));
                    }
                    self.push(&mut symbols, &name, line, start);
                }
                ch => self.push(&mut symbols, ch.encode_utf8(&mut [0; 4]), line, start),
            }
        }
        Ok(symbols)
    }
}

/// Returns the one-indexed column of a byte offset.
fn column(line: &str, byte: usize) -> u32 {
    line[..byte].chars().count() as u32 + 1
}
