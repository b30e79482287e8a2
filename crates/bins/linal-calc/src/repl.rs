//! Menu-driven vector calculator reading from any input.

use crate::{
    cmd_vec::{evaluate, VecOp},
    parse::{parse_components, Components, MAX_COMPONENTS},
};
use std::io::{self, BufRead, Write};

const MENU: &str = "Select an option:
\ta) Redefine A
\tb) Redefine B
\tc) Magnitude of A
\td) Magnitude of B
\te) A + B
\tf) A - B
\tg) A . B
\th) A X B
\ti) Distance between A and B
\tj) Angle between A and B
\tk) Quit
";

/// Interactive calculator holding two vectors, A and B.
pub struct Calculator<R, W> {
    input: R,
    output: W,
    a: Components,
    b: Components,
}

impl<R: BufRead, W: Write> Calculator<R, W> {
    /// Creates a calculator reading commands from `input`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            a: Components::default(),
            b: Components::default(),
        }
    }

    /// Reads a line; `None` at the end of the input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    /// Prompts until a valid vector is entered; `None` at the end of the
    /// input.
    fn read_vector(&mut self, prompt: &str) -> io::Result<Option<Components>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_components(&line) {
                Ok(v) => return Ok(Some(v)),
                Err(err) => {
                    log::trace!("rejected vector input {:?}: {}", line.trim_end(), err);
                    writeln!(
                        self.output,
                        "ERROR! Make sure the vector is in the right format and has at most \
                         {MAX_COMPONENTS} components.\n"
                    )?;
                },
            }
        }
    }

    /// Runs the menu loop until the user quits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        let Some(a) = self.read_vector("Enter A in the format (x; y; z; ...): ")? else {
            return Ok(());
        };
        self.a = a;
        let Some(b) = self.read_vector("Enter B in the format (x; y; z; ...): ")? else {
            return Ok(());
        };
        self.b = b;
        writeln!(self.output)?;

        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            let option = line.trim_start().chars().next();
            log::trace!("selected option {:?}", option);
            let (op, a, b) = match option {
                Some('a') => {
                    match self.read_vector("Enter the new value of A in the format (x; y; z; ...): ")? {
                        Some(a) => self.a = a,
                        None => return Ok(()),
                    }
                    continue;
                },
                Some('b') => {
                    match self.read_vector("Enter the new value of B in the format (x; y; z; ...): ")? {
                        Some(b) => self.b = b,
                        None => return Ok(()),
                    }
                    continue;
                },
                Some('c') => (VecOp::Magnitude, &self.a, None),
                Some('d') => (VecOp::Magnitude, &self.b, None),
                Some('e') => (VecOp::Add, &self.a, Some(&self.b)),
                Some('f') => (VecOp::Sub, &self.a, Some(&self.b)),
                Some('g') => (VecOp::Dot, &self.a, Some(&self.b)),
                Some('h') => (VecOp::Cross, &self.a, Some(&self.b)),
                Some('i') => (VecOp::Dist, &self.a, Some(&self.b)),
                Some('j') => (VecOp::Angle, &self.a, Some(&self.b)),
                Some('k') => return Ok(()),
                _ => {
                    writeln!(self.output, "Invalid option! Try again...")?;
                    continue;
                },
            };
            match evaluate(op, a, b) {
                Ok(result) => writeln!(self.output, "{result}")?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> String {
        let mut output = Vec::new();
        Calculator::new(input.as_bytes(), &mut output).run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn evaluates_selected_options() {
        let out = session("(1; 2; 3)\n(4; 5; 6)\ne\ng\nh\nk\n");
        assert!(out.contains("(1; 2; 3) + (4; 5; 6) = (5; 7; 9)"));
        assert!(out.contains("(1; 2; 3) . (4; 5; 6) = 32"));
        assert!(out.contains("(1; 2; 3) X (4; 5; 6) = (-3; 6; -3)"));
    }

    #[test]
    fn reprompts_on_invalid_vectors() {
        let out = session("1; 2\n(1; 2)\n(3; 4)\n  c\nk\n");
        assert_eq!(out.matches("Enter A").count(), 2);
        assert!(out.contains("ERROR!"));
        assert!(out.contains("|(1; 2)| = 2.23606797749979"));
    }

    #[test]
    fn redefines_vectors() {
        let out = session("(1)\n(2)\na\n(0; 3; 4)\nc\nz\nh\n");
        assert!(out.contains("|(0; 3; 4)| = 5"));
        assert!(out.contains("Invalid option! Try again..."));
        assert!(out.contains("The cross product is only available for 3D vectors"));
    }

    #[test]
    fn stops_at_end_of_input() {
        assert!(session("").starts_with("Enter A"));
        assert!(session("(1)\n(2)\n").ends_with("\tk) Quit\n"));
    }
}
