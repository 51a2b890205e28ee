use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Bounded stack with absolute-index access
///
/// One instance holds every live call frame's integer slots; separate
/// transient instances hold token text during expression parsing. Variable
/// offsets are absolute indices into the frame instance, so `get`/`set`
/// are bounds-checked rather than undefined.

pub const STACK_SIZE: usize = 100;

pub struct Stack<T> {
    overflow_message: &'static str,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str) -> Stack<T> {
        Stack {
            overflow_message,
            vec: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn clear(&mut self) {
        self.vec.clear()
    }

    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }

    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= STACK_SIZE {
            return Err(error!(OutOfMemory; self.overflow_message));
        }
        self.vec.push(val);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }

    pub fn pop_n(&mut self, len: usize) -> Result<()> {
        if len > self.vec.len() {
            return Err(self.underflow_error());
        }
        self.vec.truncate(self.vec.len() - len);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        match self.vec.get(index) {
            Some(v) => Ok(v),
            None => Err(self.range_error(index)),
        }
    }

    pub fn set(&mut self, index: usize, val: T) -> Result<()> {
        match self.vec.get_mut(index) {
            Some(v) => {
                *v = val;
                Ok(())
            }
            None => Err(self.range_error(index)),
        }
    }

    fn underflow_error(&self) -> Error {
        error!(InternalError; "STACK UNDERFLOW")
    }

    fn range_error(&self, index: usize) -> Error {
        error!(OutOfRange; format!("STACK INDEX {} OF {}", index, self.vec.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut s: Stack<i32> = Stack::new("TEST");
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert_eq!(s.pop().unwrap(), 2);
        assert_eq!(s.len(), 1);
        s.pop().unwrap();
        assert!(s.pop().is_err());
    }

    #[test]
    fn test_indexing() {
        let mut s: Stack<i32> = Stack::new("TEST");
        s.push(10).unwrap();
        s.push(20).unwrap();
        assert_eq!(*s.get(0).unwrap(), 10);
        s.set(1, 21).unwrap();
        assert_eq!(*s.get(1).unwrap(), 21);
        assert!(s.get(2).is_err());
        assert!(s.set(2, 0).is_err());
    }

    #[test]
    fn test_overflow() {
        let mut s: Stack<i32> = Stack::new("TEST");
        for n in 0..STACK_SIZE as i32 {
            s.push(n).unwrap();
        }
        assert!(s.push(0).is_err());
    }

    #[test]
    fn test_pop_n() {
        let mut s: Stack<i32> = Stack::new("TEST");
        for n in 0..5 {
            s.push(n).unwrap();
        }
        s.pop_n(3).unwrap();
        assert_eq!(s.len(), 2);
        assert!(s.pop_n(3).is_err());
    }
}
