/// Characters that toggle Discord markdown formatting.
const MARKDOWN_CHARS: [char; 7] = ['\\', '*', '_', '~', '`', '|', '>'];

/// Escapes Discord markdown so user-supplied text renders literally inside embeds.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_formatting_characters() {
        assert_eq!(escape_markdown("**bold**_x_"), r"\*\*bold\*\*\_x\_");
        assert_eq!(escape_markdown("a|b`c~d>e\\"), r"a\|b\`c\~d\>e\\");
    }

    #[test]
    fn leaves_plain_text_untouched() {
        assert_eq!(escape_markdown("Jugador 123"), "Jugador 123");
    }
}
