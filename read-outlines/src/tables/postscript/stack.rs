//! Operand stack for charstring evaluation.

use super::Error;

/// Maximum size of the operand stack.
///
/// "The Type 1 BuildChar operand stack has a limit of 24 entries."
const MAX_STACK: usize = 24;

/// Operand stack for charstrings.
///
/// All operands are 32-bit integers; fractional values only arise from the
/// `div` operator, which has no effect on outlines.
#[derive(Clone, Debug)]
pub struct Stack {
    values: [i32; MAX_STACK],
    top: usize,
}

impl Stack {
    pub fn new() -> Self {
        Self {
            values: [0; MAX_STACK],
            top: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.top
    }

    pub fn verify_at_least_len(&self, len: usize) -> Result<(), Error> {
        if self.top < len {
            Err(Error::StackUnderflow)
        } else {
            Ok(())
        }
    }

    pub fn clear(&mut self) {
        self.top = 0;
    }

    pub fn push(&mut self, value: i32) -> Result<(), Error> {
        if self.top == MAX_STACK {
            return Err(Error::StackOverflow);
        }
        self.values[self.top] = value;
        self.top += 1;
        Ok(())
    }

    /// Returns an array of the first `N` values on the stack.
    ///
    /// Any values beyond the first `N` are ignored, while fewer than `N`
    /// is an underflow.
    pub fn get_array<const N: usize>(&self) -> Result<[i32; N], Error> {
        self.verify_at_least_len(N)?;
        let mut result = [0; N];
        result.copy_from_slice(&self.values[..N]);
        Ok(result)
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, Stack, MAX_STACK};

    #[test]
    fn push_clear() {
        let mut stack = Stack::new();
        stack.push(20).unwrap();
        stack.push(-5).unwrap();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.get_array::<2>(), Ok([20, -5]));
        stack.clear();
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.get_array::<1>(), Err(Error::StackUnderflow));
    }

    #[test]
    fn overflow() {
        let mut stack = Stack::new();
        for i in 0..MAX_STACK {
            stack.push(i as i32).unwrap();
        }
        assert_eq!(stack.push(0), Err(Error::StackOverflow));
        assert_eq!(stack.len(), MAX_STACK);
    }

    #[test]
    fn array_reads_leading_values() {
        let mut stack = Stack::new();
        for value in [1, 2, 3, 4] {
            stack.push(value).unwrap();
        }
        assert_eq!(stack.get_array::<2>(), Ok([1, 2]));
        assert_eq!(stack.get_array::<4>(), Ok([1, 2, 3, 4]));
        assert_eq!(stack.get_array::<5>(), Err(Error::StackUnderflow));
    }
}
