use super::LineNumber;

pub struct Error {
    code: u16,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: line,
            message: self.message.clone(),
        }
    }

    pub fn message<S: Into<String>>(&self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            line_number: self.line_number,
            message: message.into(),
        }
    }

    pub fn has_line_number(&self) -> bool {
        self.line_number.is_some()
    }
}

pub enum ErrorCode {
    SyntaxError = 2,
    BadCommand = 3,
    UndefinedSymbol = 4,
    TypeMismatch = 5,
    BlockMismatch = 6,
    Overflow = 7,
    OutOfMemory = 8,
    OutOfRange = 9,
    DivisionByZero = 11,
    ReturnMismatch = 12,
    EndOfInput = 13,
    Break = 21,
    InternalError = 51,
    FileNotFound = 53,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            3 => "BAD COMMAND",
            4 => "UNDEFINED SYMBOL",
            5 => "TYPE MISMATCH",
            6 => "BLOCK MISMATCH",
            7 => "OVERFLOW",
            8 => "OUT OF MEMORY",
            9 => "OUT OF RANGE",
            11 => "DIVISION BY ZERO",
            12 => "RETURN MISMATCH",
            13 => "END OF INPUT",
            21 => "BREAK",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "?PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "?{}{}", code_str, suffix)
        }
    }
}
