// Sat Oct 17 2026 - Alex

use crate::node::DebugResult;
use crate::output::{Indent, NodeSizeSerializer};
use std::io::{self, Write};

pub const BEGIN_MARKER: &str = "//=== BEGIN AUTOGENERATED SECTION ===//";
pub const END_MARKER: &str = "//=== END AUTOGENERATED SECTION ===//";

/// Emits C++ traits giving the full node size of a container for a value type.
///
/// For every container the output is
///
/// ```text
/// namespace detail
/// {
///     template <std::size_t Alignment>
///     struct <name>_node_size;
///
///     template <>
///     struct <name>_node_size<A>
///     : std::integral_constant<std::size_t, BASE>
///     {};
/// } // namespace detail
///
/// template <typename T>
/// struct <name>_node_size
/// : std::integral_constant<std::size_t,
///        detail::<name>_node_size<alignof(T)>::value + sizeof(T)>
/// {};
/// ```
///
/// with one specialization per alignment class.
#[derive(Debug, Clone)]
pub struct CodeSerializer {
    indent: Indent,
    generator: String,
    alignment_expression: String,
}

impl CodeSerializer {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            generator: env!("CARGO_PKG_NAME").to_string(),
            alignment_expression: "alignof(T)".to_string(),
        }
    }

    /// Program named in the leading comment.
    pub fn with_generator(mut self, generator: &str) -> Self {
        self.generator = generator.to_string();
        self
    }

    /// Expression yielding the alignment of `T`, e.g. a portability macro.
    pub fn with_alignment_expression(mut self, expression: &str) -> Self {
        self.alignment_expression = expression.to_string();
        self
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    pub fn struct_name(container_name: &str) -> String {
        format!("{}_node_size", container_name)
    }
}

impl Default for CodeSerializer {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}

impl NodeSizeSerializer for CodeSerializer {
    fn prefix(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "// The following section was autogenerated by {}", self.generator)?;
        writeln!(out, "{}", BEGIN_MARKER)?;
        writeln!(out)
    }

    fn emit(&self, out: &mut dyn Write, result: &DebugResult) -> io::Result<()> {
        let tab = self.indent.unit();
        let name = Self::struct_name(result.container_name());

        writeln!(out, "namespace detail")?;
        writeln!(out, "{{")?;
        writeln!(out, "{}template <std::size_t Alignment>", tab)?;
        writeln!(out, "{}struct {};", tab, name)?;
        for entry in result.node_sizes() {
            writeln!(out)?;
            writeln!(out, "{}template <>", tab)?;
            writeln!(out, "{}struct {}<{}>", tab, name, entry.alignment)?;
            writeln!(out, "{}: std::integral_constant<std::size_t, {}>", tab, entry.base_size)?;
            writeln!(out, "{}{{}};", tab)?;
        }
        writeln!(out, "}} // namespace detail")?;
        writeln!(out)?;

        writeln!(out, "template <typename T>")?;
        writeln!(out, "struct {}", name)?;
        writeln!(out, ": std::integral_constant<std::size_t,")?;
        writeln!(
            out,
            "       detail::{}<{}>::value + sizeof(T)>",
            name, self.alignment_expression
        )?;
        writeln!(out, "{{}};")?;
        writeln!(out)
    }

    fn suffix(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", END_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Alignment, ContainerKind, NodeSizeEntry};

    fn list_result() -> DebugResult {
        let entry = |a, s| NodeSizeEntry::new(Alignment::new(a).unwrap(), s);
        DebugResult::new(ContainerKind::List, vec![entry(1, 23), entry(8, 16)]).unwrap()
    }

    fn render(serializer: &CodeSerializer, result: &DebugResult) -> String {
        let mut out = Vec::new();
        serializer.emit(&mut out, result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_emit_exact_text() {
        let text = render(&CodeSerializer::new(Indent::new(4).unwrap()), &list_result());
        let expected = "\
namespace detail
{
    template <std::size_t Alignment>
    struct list_node_size;

    template <>
    struct list_node_size<1>
    : std::integral_constant<std::size_t, 23>
    {};

    template <>
    struct list_node_size<8>
    : std::integral_constant<std::size_t, 16>
    {};
} // namespace detail

template <typename T>
struct list_node_size
: std::integral_constant<std::size_t,
       detail::list_node_size<alignof(T)>::value + sizeof(T)>
{};

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_tab_indent() {
        let text = render(&CodeSerializer::new(Indent::tab()), &list_result());
        assert!(text.contains("\n\ttemplate <>\n\tstruct list_node_size<1>\n"));
        assert!(!text.contains("    template"));
    }

    #[test]
    fn test_braces_balanced() {
        let text = render(&CodeSerializer::default(), &list_result());
        let open = text.matches('{').count();
        let close = text.matches('}').count();
        assert_eq!(open, close);
        assert_eq!(text.matches("template <>").count(), 2);
    }

    #[test]
    fn test_prefix_suffix_markers() {
        let serializer = CodeSerializer::default().with_generator("gen");
        let mut out = Vec::new();
        serializer.prefix(&mut out).unwrap();
        serializer.suffix(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            format!(
                "// The following section was autogenerated by gen\n{}\n\n{}\n",
                BEGIN_MARKER, END_MARKER
            )
        );
    }

    #[test]
    fn test_custom_alignment_expression() {
        let serializer = CodeSerializer::default().with_alignment_expression("FOONATHAN_ALIGNOF(T)");
        let text = render(&serializer, &list_result());
        assert!(text.contains("detail::list_node_size<FOONATHAN_ALIGNOF(T)>::value + sizeof(T)>"));
    }
}
