use super::{Category, ErrorGuideItem, Severity};

pub static GUIDES: &[ErrorGuideItem] = &[
    ErrorGuideItem {
        id: "trailing-comma",
        title: "Trailing comma",
        description: "A comma follows the last member of an object or the last element of an array. JSON does not allow a comma before a closing brace or bracket.",
        category: Category::Syntax,
        severity: Severity::Medium,
        common_causes: &[
            "Copying object literals from JavaScript code",
            "Deleting the last property but leaving its comma behind",
            "Generating output by appending a comma after every item",
        ],
        bad_example: r#"{"name": "John", "age": 30,}"#,
        solution: r#"{"name": "John", "age": 30}"#,
        tips: &[
            "Remove the comma right before } or ]",
            "Build lists with a join instead of appending separators by hand",
            "Configure your editor to flag trailing commas in .json files",
        ],
        related_errors: &["unexpected-token", "missing-comma"],
    },
    ErrorGuideItem {
        id: "unexpected-token",
        title: "Unexpected token",
        description: "The parser found a character that cannot start or continue a value at this position. The offending character is usually shown in the error message.",
        category: Category::Syntax,
        severity: Severity::High,
        common_causes: &[
            "Comments or other JavaScript-only syntax inside the document",
            "An HTML error page returned where JSON was expected",
            "Stray characters left over from manual editing",
        ],
        bad_example: r#"{"status": ok}"#,
        solution: r#"{"status": "ok"}"#,
        tips: &[
            "Look at the character at the reported position",
            "Check the response content type when parsing HTTP bodies",
            "Quote every string value",
        ],
        related_errors: &["trailing-comma", "single-quotes", "comments-not-allowed"],
    },
    ErrorGuideItem {
        id: "unexpected-end",
        title: "Unexpected end of input",
        description: "The input stopped before the value was complete. An object, array or string was opened but never closed.",
        category: Category::Structure,
        severity: Severity::High,
        common_causes: &[
            "Truncated download or partially written file",
            "Missing closing brace or bracket",
            "Parsing an empty response body",
        ],
        bad_example: r#"{"users": [{"id": 1}, {"id": 2}"#,
        solution: r#"{"users": [{"id": 1}, {"id": 2}]}"#,
        tips: &[
            "Count opening and closing brackets",
            "Check that the body is not empty before parsing",
            "Make sure writers flush and close files before readers open them",
        ],
        related_errors: &["mismatched-brackets", "invalid-string"],
    },
    ErrorGuideItem {
        id: "invalid-string",
        title: "Invalid string",
        description: "A string literal is not terminated or contains an unescaped double quote. Every quote inside a string must be written as \\\".",
        category: Category::Syntax,
        severity: Severity::Medium,
        common_causes: &[
            "Unescaped double quote inside a value",
            "String concatenation without proper escaping",
            "Missing closing quote",
        ],
        bad_example: r#"{"quote": "She said "hi""}"#,
        solution: r#"{"quote": "She said \"hi\""}"#,
        tips: &[
            "Escape embedded quotes with a backslash",
            "Use a serializer instead of formatting JSON by hand",
        ],
        related_errors: &["invalid-escape", "control-character"],
    },
    ErrorGuideItem {
        id: "invalid-property",
        title: "Invalid property name",
        description: "An object key is not a double-quoted string. Bare identifiers and single-quoted keys are accepted by JavaScript but not by JSON.",
        category: Category::Syntax,
        severity: Severity::Medium,
        common_causes: &[
            "Unquoted keys copied from a JavaScript object literal",
            "Keys written with single quotes",
            "Numbers used as keys without quotes",
        ],
        bad_example: r#"{name: "John", age: 30}"#,
        solution: r#"{"name": "John", "age": 30}"#,
        tips: &[
            "Wrap every key in double quotes",
            "Use JSON.stringify or a serializer to produce documents",
        ],
        related_errors: &["single-quotes", "trailing-comma"],
    },
    ErrorGuideItem {
        id: "single-quotes",
        title: "Single-quoted string",
        description: "Strings and keys must use double quotes. A single quote cannot begin a JSON value.",
        category: Category::Syntax,
        severity: Severity::Medium,
        common_causes: &[
            "Python dict repr printed instead of serialized",
            "Hand-written config using JavaScript quoting style",
        ],
        bad_example: r#"{'name': 'John'}"#,
        solution: r#"{"name": "John"}"#,
        tips: &[
            "Replace single quotes around keys and values with double quotes",
            "In Python use json.dumps instead of str() on a dict",
        ],
        related_errors: &["invalid-property", "unexpected-token"],
    },
    ErrorGuideItem {
        id: "comments-not-allowed",
        title: "Comments are not allowed",
        description: "JSON has no comment syntax. Line comments starting with // and block comments are rejected by every compliant parser.",
        category: Category::Syntax,
        severity: Severity::Low,
        common_causes: &[
            "Annotated configuration files",
            "Documents written for a JSON5 or JSONC parser",
        ],
        bad_example: "{\n  // server port\n  \"port\": 8080\n}",
        solution: "{\n  \"port\": 8080\n}",
        tips: &[
            "Move notes into a separate documentation field such as \"_comment\"",
            "Use a JSONC-aware loader if comments are required",
        ],
        related_errors: &["unexpected-token", "json5-syntax"],
    },
    ErrorGuideItem {
        id: "missing-comma",
        title: "Missing comma",
        description: "Two members or elements follow each other without a separating comma.",
        category: Category::Syntax,
        severity: Severity::High,
        common_causes: &[
            "Adding a new line to an object and forgetting the separator",
            "Merging two documents by concatenation",
        ],
        bad_example: "{\n  \"a\": 1\n  \"b\": 2\n}",
        solution: "{\n  \"a\": 1,\n  \"b\": 2\n}",
        tips: &[
            "Check the line before the reported position",
            "Pretty-print the document to see where members run together",
        ],
        related_errors: &["trailing-comma", "mismatched-brackets"],
    },
    ErrorGuideItem {
        id: "mismatched-brackets",
        title: "Mismatched brackets",
        description: "A closing brace or bracket does not match the most recently opened container.",
        category: Category::Structure,
        severity: Severity::High,
        common_causes: &[
            "Closing an array with } or an object with ]",
            "Extra closing bracket after an edit",
        ],
        bad_example: r#"{"items": [1, 2, 3}"#,
        solution: r#"{"items": [1, 2, 3]}"#,
        tips: &[
            "Use an editor with bracket matching",
            "Format the document to make nesting visible",
        ],
        related_errors: &["unexpected-end", "missing-comma"],
    },
    ErrorGuideItem {
        id: "trailing-characters",
        title: "Extra data after the value",
        description: "A complete value was parsed but more non-whitespace content follows it. A document holds exactly one top-level value.",
        category: Category::Structure,
        severity: Severity::Medium,
        common_causes: &[
            "Several objects written to one file without an enclosing array",
            "Line-delimited content parsed as a single document",
            "Garbage appended by a logging framework",
        ],
        bad_example: "{\"id\": 1}\n{\"id\": 2}",
        solution: "[{\"id\": 1}, {\"id\": 2}]",
        tips: &[
            "Wrap multiple values in an array",
            "Parse line-delimited data one line at a time",
        ],
        related_errors: &["jsonl-record"],
    },
    ErrorGuideItem {
        id: "jsonl-record",
        title: "Invalid JSON Lines record",
        description: "Each line of a line-delimited file must hold one complete value. A record that spans lines or a line with partial content breaks the file.",
        category: Category::Structure,
        severity: Severity::Medium,
        common_causes: &[
            "Pretty-printed objects written into a .jsonl file",
            "Embedded newline characters that were not escaped",
        ],
        bad_example: "{\"id\": 1,\n \"name\": \"a\"}",
        solution: "{\"id\": 1, \"name\": \"a\"}",
        tips: &[
            "Serialize each record compactly before writing it",
            "Escape newlines inside strings as \\n",
        ],
        related_errors: &["trailing-characters", "control-character"],
    },
    ErrorGuideItem {
        id: "invalid-number",
        title: "Invalid number",
        description: "A numeric value uses a form JSON does not support: leading zeros, hexadecimal, a leading plus sign, NaN or Infinity.",
        category: Category::DataType,
        severity: Severity::Medium,
        common_causes: &[
            "Serializing NaN or Infinity from floating point code",
            "Zero-padded identifiers written as numbers",
            "Hexadecimal literals copied from source code",
        ],
        bad_example: r#"{"count": 007, "ratio": NaN}"#,
        solution: r#"{"count": 7, "ratio": null}"#,
        tips: &[
            "Write padded identifiers as strings",
            "Replace NaN and Infinity with null or a sentinel string",
        ],
        related_errors: &["undefined-value"],
    },
    ErrorGuideItem {
        id: "undefined-value",
        title: "Undefined or unsupported value",
        description: "The value is not one of string, number, object, array, true, false or null. undefined, functions and misspelled literals are rejected.",
        category: Category::DataType,
        severity: Severity::Medium,
        common_causes: &[
            "Parsing the string \"undefined\" from an unset variable",
            "Capitalized literals such as True or NULL",
            "Misspelled true, false or null",
        ],
        bad_example: r#"{"active": True, "parent": undefined}"#,
        solution: r#"{"active": true, "parent": null}"#,
        tips: &[
            "Use lowercase true, false and null",
            "Check a variable is set before parsing it",
        ],
        related_errors: &["invalid-number", "unexpected-token"],
    },
    ErrorGuideItem {
        id: "duplicate-keys",
        title: "Duplicate keys",
        description: "The same key appears twice in one object. Most parsers silently keep the last value; strict parsers reject the document.",
        category: Category::Structure,
        severity: Severity::Low,
        common_causes: &[
            "Merging configuration blocks by hand",
            "Case variants of the same key",
        ],
        bad_example: r#"{"port": 80, "port": 8080}"#,
        solution: r#"{"port": 8080}"#,
        tips: &["Keep one definition per key", "Sort keys to spot repeats"],
        related_errors: &[],
    },
    ErrorGuideItem {
        id: "invalid-escape",
        title: "Invalid escape sequence",
        description: "A backslash inside a string is followed by a character that is not a valid escape, or a \\u escape is incomplete.",
        category: Category::Encoding,
        severity: Severity::Medium,
        common_causes: &[
            "Windows paths with single backslashes",
            "Regular expressions pasted into strings",
            "Truncated unicode escape",
        ],
        bad_example: r#"{"path": "C:\new\data"}"#,
        solution: r#"{"path": "C:\\new\\data"}"#,
        tips: &[
            "Double every literal backslash",
            "Valid escapes are \\\" \\\\ \\/ \\b \\f \\n \\r \\t and \\uXXXX",
        ],
        related_errors: &["invalid-string", "encoding-error"],
    },
    ErrorGuideItem {
        id: "control-character",
        title: "Control character in string",
        description: "A raw control character such as a tab or newline appears inside a string. Control characters must be escaped.",
        category: Category::Encoding,
        severity: Severity::Medium,
        common_causes: &[
            "Multi-line text inserted without escaping",
            "Tab characters pasted into values",
        ],
        bad_example: "{\"note\": \"line one\nline two\"}",
        solution: r#"{"note": "line one\nline two"}"#,
        tips: &["Escape newlines as \\n and tabs as \\t"],
        related_errors: &["invalid-string", "invalid-escape"],
    },
    ErrorGuideItem {
        id: "encoding-error",
        title: "Encoding problem",
        description: "The input is not valid UTF-8 or starts with a byte order mark. JSON exchanged between systems must be UTF-8 without a BOM.",
        category: Category::Encoding,
        severity: Severity::Low,
        common_causes: &[
            "Files saved as UTF-16 or with a BOM by Windows editors",
            "Latin-1 text mislabelled as UTF-8",
        ],
        bad_example: "\u{feff}{\"id\": 1}",
        solution: "{\"id\": 1}",
        tips: &[
            "Save the file as UTF-8 without BOM",
            "Strip the BOM before parsing",
        ],
        related_errors: &["invalid-escape"],
    },
    ErrorGuideItem {
        id: "nesting-depth",
        title: "Nesting too deep",
        description: "Objects and arrays are nested beyond the parser's recursion limit.",
        category: Category::Structure,
        severity: Severity::Low,
        common_causes: &[
            "Recursive data serialized without a depth limit",
            "Malicious input built to exhaust the stack",
        ],
        bad_example: "[[[[[[[[[[ ... ]]]]]]]]]]",
        solution: "Flatten the structure or reference children by id",
        tips: &["Limit depth when serializing recursive structures"],
        related_errors: &["mismatched-brackets"],
    },
];
