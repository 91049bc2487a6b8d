use super::{Formatter, ToSql};
use crate::stmt::Name;

pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let ident = self.0.as_ref();

        let Some(quote) = f.serializer.escape_char else {
            f.dst.push_str(ident);
            return;
        };

        if ident == "*" || Name::is_expr(ident) || is_escaped(ident, quote) {
            f.dst.push_str(ident);
            return;
        }

        f.dst.push(quote);
        for ch in ident.chars() {
            if ch == quote {
                f.dst.push(quote);
            }
            f.dst.push(ch);
        }
        f.dst.push(quote);
    }
}

fn is_escaped(ident: &str, quote: char) -> bool {
    ident.len() >= 2 && ident.starts_with(quote) && ident.ends_with(quote)
}
