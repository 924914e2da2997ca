//! C# writer.
//!
//! Places translated functions in an `internal static unsafe class` so that
//! pointer arithmetic in the C bodies keeps compiling unchanged.

use super::{Container, OutputDocument, SupportFile};
use crate::traits::Writer;

/// Static instance of the C# writer for registry.
pub static CSHARP_WRITER: CSharpWriterImpl = CSharpWriterImpl;

/// C# writer implementing the Writer trait.
pub struct CSharpWriterImpl;

impl Writer for CSharpWriterImpl {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn extension(&self) -> &'static str {
        "cs"
    }

    fn assemble(&self, container: &Container, imports: &[String], body: &[String]) -> OutputDocument {
        CSharpWriter::emit(container, imports, body)
    }

    fn support_files(&self, namespace: &str) -> Vec<SupportFile> {
        vec![SupportFile {
            file_name: "Pointer.cs",
            document: CSharpWriter::pointer(namespace),
        }]
    }
}

/// Span-backed stand-in for C pointers: indexing plus `p + i` offsets.
const POINTER_STRUCT: &[&str] = &[
    "internal ref struct Pointer<T>",
    "{",
    "    private Span<T> span;",
    "",
    "    public Pointer(Span<T> span)",
    "    {",
    "        this.span = span;",
    "    }",
    "",
    "    public T this[int i]",
    "    {",
    "        get => span[i];",
    "        set => span[i] = value;",
    "    }",
    "",
    "    public Span<T> Span => span;",
    "",
    "    public static Pointer<T> operator +(Pointer<T> p, int i)",
    "    {",
    "        return new Pointer<T>(p.span.Slice(i));",
    "    }",
    "",
    "    public static Pointer<T> operator +(int i, Pointer<T> p)",
    "    {",
    "        return new Pointer<T>(p.span.Slice(i));",
    "    }",
    "}",
];

/// Emits C# source files line by line.
pub struct CSharpWriter {
    lines: Vec<String>,
    indent: usize,
}

impl CSharpWriter {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            indent: 0,
        }
    }

    /// Wrap translated body lines in namespace and class.
    ///
    /// Every body line gets the same indentation, blank ones included.
    pub fn emit(container: &Container, imports: &[String], body: &[String]) -> OutputDocument {
        let mut writer = Self::new();
        writer.write_usings(imports);
        writer.open(&format!("namespace {}", container.namespace));
        writer.open(&format!("internal static unsafe class {}", container.class_name));
        for line in body {
            writer.write_line(line);
        }
        writer.close();
        writer.close();
        writer.finish()
    }

    /// The `Pointer<T>` helper the translated kernels index through.
    pub fn pointer(namespace: &str) -> OutputDocument {
        let mut writer = Self::new();
        writer.write_usings(&["System".to_string()]);
        writer.open(&format!("namespace {namespace}"));
        for line in POINTER_STRUCT {
            if line.is_empty() {
                writer.lines.push(String::new());
            } else {
                writer.write_line(line);
            }
        }
        writer.close();
        writer.finish()
    }

    fn write_usings(&mut self, imports: &[String]) {
        if imports.is_empty() {
            return;
        }
        for import in imports {
            self.write_line(&format!("using {import};"));
        }
        self.lines.push(String::new());
    }

    fn write_line(&mut self, text: &str) {
        let mut line = String::with_capacity(self.indent * 4 + text.len());
        for _ in 0..self.indent {
            line.push_str("    ");
        }
        line.push_str(text);
        self.lines.push(line);
    }

    fn open(&mut self, header: &str) {
        self.write_line(header);
        self.write_line("{");
        self.indent += 1;
    }

    fn close(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.write_line("}");
    }

    fn finish(self) -> OutputDocument {
        OutputDocument::new(self.lines)
    }
}

impl Default for CSharpWriter {
    fn default() -> Self {
        Self::new()
    }
}
