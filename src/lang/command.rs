/// ## Statement vocabulary
///
/// Every source line classifies to exactly one `Command`. Keyword commands
/// are matched case-insensitively against the first word of the line;
/// `Assign` and `Call` are recognized from the shape of the line instead
/// (`name := ...` and `name(...)`), and `EndProgram` is also produced
/// synthetically when the cursor passes the last line.

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Command {
    Assign,
    Blank,
    Call,
    Comment,
    Declare,
    EndIf,
    EndProgram,
    EndWhile,
    Function,
    If,
    Input,
    Print,
    PrintLn,
    Procedure,
    Return,
    Unknown,
    While,
}

impl Command {
    pub fn from_word(word: &str) -> Option<Command> {
        use Command::*;
        let keyword = match () {
            _ if word.eq_ignore_ascii_case("DECLARE") => Declare,
            _ if word.eq_ignore_ascii_case("ENDIF") => EndIf,
            _ if word.eq_ignore_ascii_case("ENDPROGRAM") => EndProgram,
            _ if word.eq_ignore_ascii_case("ENDWHILE") => EndWhile,
            _ if word.eq_ignore_ascii_case("FUNCTION") => Function,
            _ if word.eq_ignore_ascii_case("IF") => If,
            _ if word.eq_ignore_ascii_case("INPUT") => Input,
            _ if word.eq_ignore_ascii_case("PRINT") => Print,
            _ if word.eq_ignore_ascii_case("PRINTLN") => PrintLn,
            _ if word.eq_ignore_ascii_case("PROCEDURE") => Procedure,
            _ if word.eq_ignore_ascii_case("RETURN") => Return,
            _ if word.eq_ignore_ascii_case("WHILE") => While,
            _ => return None,
        };
        Some(keyword)
    }

    /// FUNCTION or PROCEDURE: opens a callable body.
    pub fn is_header(&self) -> bool {
        matches!(self, Command::Function | Command::Procedure)
    }

    /// COMMENT or BLANK: carries no statement.
    pub fn is_empty(&self) -> bool {
        matches!(self, Command::Comment | Command::Blank)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Command::*;
        match self {
            Assign => write!(f, ":="),
            Blank => write!(f, ""),
            Call => write!(f, "CALL"),
            Comment => write!(f, ";"),
            Declare => write!(f, "DECLARE"),
            EndIf => write!(f, "ENDIF"),
            EndProgram => write!(f, "ENDPROGRAM"),
            EndWhile => write!(f, "ENDWHILE"),
            Function => write!(f, "FUNCTION"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Print => write!(f, "PRINT"),
            PrintLn => write!(f, "PRINTLN"),
            Procedure => write!(f, "PROCEDURE"),
            Return => write!(f, "RETURN"),
            Unknown => write!(f, "UNKNOWN"),
            While => write!(f, "WHILE"),
        }
    }
}
