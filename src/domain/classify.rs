//! 예외 식별자를 사람이 읽을 수 있는 문구로 변환하는 분류기.

/// 카탈로그에 없는 식별자에 붙는 고정 접미사.
pub const UNKNOWN_SUFFIX: &str = " occurred [Unknown Exception for handler],";

/// 식별자 -> 표준 문구 카탈로그.
/// 문구는 뒤에 줄 번호/상세 정보가 이어지도록 쉼표로 끝난다.
const CATALOG: &[(&str, &str)] = &[
    ("ZeroDivisionError", "Division by zero is not allowed,"),
    ("ArithmeticError", "An arithmetic operation failed,"),
    ("OverflowError", "A numeric result is too large to be represented,"),
    ("FloatingPointError", "A floating point operation failed,"),
    ("AssertionError", "An assertion failed,"),
    ("AttributeError", "An attribute reference or assignment failed,"),
    ("ImportError", "A module or name could not be imported,"),
    ("ModuleNotFoundError", "The requested module could not be found,"),
    ("IndexError", "Index is out of range,"),
    ("KeyError", "The requested key was not found,"),
    ("NameError", "A name is not defined,"),
    ("UnboundLocalError", "A local variable was referenced before assignment,"),
    ("TypeError", "An operation was applied to a value of the wrong type,"),
    ("ValueError", "A value has the right type but an invalid content,"),
    ("UnicodeError", "A Unicode encoding or decoding error occurred,"),
    ("UnicodeDecodeError", "Bytes could not be decoded as text,"),
    ("UnicodeEncodeError", "Text could not be encoded,"),
    ("FileNotFoundError", "The requested file was not found,"),
    ("FileExistsError", "The file already exists,"),
    ("IsADirectoryError", "A file operation was requested on a directory,"),
    ("NotADirectoryError", "A directory operation was requested on a non-directory,"),
    ("PermissionError", "Permission denied,"),
    ("TimeoutError", "The operation timed out,"),
    ("ConnectionError", "A connection error occurred,"),
    ("ConnectionRefusedError", "The connection was refused,"),
    ("ConnectionResetError", "The connection was reset by the peer,"),
    ("BrokenPipeError", "Write to a closed pipe,"),
    ("OSError", "An operating system error occurred,"),
    ("EOFError", "Unexpected end of input,"),
    ("MemoryError", "The operation ran out of memory,"),
    ("RecursionError", "Maximum recursion depth exceeded,"),
    ("RuntimeError", "A runtime error occurred,"),
    ("NotImplementedError", "This feature is not implemented,"),
    ("StopIteration", "The iterator has no more items,"),
    ("KeyboardInterrupt", "The operation was interrupted by the user,"),
    ("SystemExit", "The program requested to exit,"),
    // Rust 표준 라이브러리 오류 타입
    ("ParseIntError", "The text could not be parsed as an integer,"),
    ("ParseFloatError", "The text could not be parsed as a floating point number,"),
    ("ParseBoolError", "The text could not be parsed as a boolean,"),
    ("ParseCharError", "The text could not be parsed as a single character,"),
    ("TryFromIntError", "An integer conversion overflowed,"),
    ("Utf8Error", "Bytes are not valid UTF-8,"),
    ("FromUtf8Error", "Bytes are not valid UTF-8,"),
    ("AddrParseError", "The text is not a valid network address,"),
    ("Panic", "The program panicked,"),
    // io::ErrorKind 기반 식별자(`<Kind>Error`)
    ("NotFoundError", "The requested file or resource was not found,"),
    ("PermissionDeniedError", "Permission denied,"),
    ("AlreadyExistsError", "The file or resource already exists,"),
    ("InvalidInputError", "An invalid input parameter was given,"),
    ("InvalidDataError", "The data is not valid for this operation,"),
    ("UnexpectedEofError", "Unexpected end of input,"),
    ("TimedOutError", "The operation timed out,"),
    ("InterruptedError", "The operation was interrupted,"),
];

/// 식별자의 표준 문구를 반환한다. 카탈로그에 없으면 대체 문구를 만든다.
pub fn classify(type_identity: &str) -> String {
    CATALOG
        .iter()
        .find(|(identity, _)| *identity == type_identity)
        .map(|(_, phrase)| phrase.to_string())
        .unwrap_or_else(|| fallback_phrase(type_identity))
}

/// 카탈로그 여부만 확인한다.
pub fn is_known(type_identity: &str) -> bool {
    CATALOG.iter().any(|(identity, _)| *identity == type_identity)
}

/// 첫 글자를 제외한 모든 ASCII 대문자 앞에 공백을 넣고 고정 접미사를 붙인다.
pub fn fallback_phrase(type_identity: &str) -> String {
    let mut readable = String::with_capacity(type_identity.len() + UNKNOWN_SUFFIX.len() + 4);
    for (idx, ch) in type_identity.chars().enumerate() {
        if idx > 0 && ch.is_ascii_uppercase() {
            readable.push(' ');
        }
        readable.push(ch);
    }
    readable.push_str(UNKNOWN_SUFFIX);
    readable
}
