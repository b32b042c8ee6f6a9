//! Novelty commands: fixed art tables keyed by argument.

use system_shell_contract::{CommandOutput, ShellError, ShellResponse};

use crate::CommandContext;

const SHARK: &str = r#"                 ___
              _.'   |
    _____...-'      |______
 .-'  o                    `'-.__        _
<  ,                              `-._ .' )
 `-.__  ))).                        _><  (
      `'--..____      ___....---''    `._)
               `/ /-''
               /_/"#;

const LOGO: &str = r#"  ┌───────────┐
  │ ▄▄▄   ▄▄▄ │
  │ ███   ███ │
  │ ▀▀▀   ▀▀▀ │
  └───────────┘"#;

const NEOFETCH_FIELDS: [(&str, &str); 7] = [
    ("OS", "NygosakiOS (web)"),
    ("Host", "personal portfolio"),
    ("Kernel", "wasm32-unknown-unknown"),
    ("Shell", "nsh"),
    ("DE", "Leptos desktop"),
    ("Theme", "Tokyo Night"),
    ("Resolution", "whatever your browser says"),
];

/// Colour scheme for `blahaj`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlahajFlag {
    /// Plain shark blue.
    Classic,
    /// Transgender flag.
    Trans,
    /// Rainbow flag.
    Pride,
    /// Bisexual flag.
    Bi,
    /// Lesbian flag.
    Lesbian,
    /// Asexual flag.
    Ace,
    /// Non-binary flag.
    Enby,
}

impl BlahajFlag {
    /// Maps the sub-argument to a flag; unknown or missing arguments give [`Self::Classic`].
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg.map(str::to_ascii_lowercase).as_deref() {
            Some("trans") => Self::Trans,
            Some("pride" | "gay" | "rainbow") => Self::Pride,
            Some("bi") => Self::Bi,
            Some("lesbian") => Self::Lesbian,
            Some("ace") => Self::Ace,
            Some("enby" | "nonbinary") => Self::Enby,
            _ => Self::Classic,
        }
    }

    /// Stripe colours, top to bottom.
    pub fn stripes(self) -> &'static [&'static str] {
        match self {
            Self::Classic => &["#7eb6d9"],
            Self::Trans => &["#5bcefa", "#f5a9b8", "#ffffff", "#f5a9b8", "#5bcefa"],
            Self::Pride => &[
                "#e40303", "#ff8c00", "#ffed00", "#008026", "#004dff", "#750787",
            ],
            Self::Bi => &["#d60270", "#d60270", "#9b4f96", "#0038a8", "#0038a8"],
            Self::Lesbian => &["#d52d00", "#ff9a56", "#ffffff", "#d362a4", "#a30262"],
            Self::Ace => &["#000000", "#a3a3a3", "#ffffff", "#800080"],
            Self::Enby => &["#fcf434", "#ffffff", "#9c59d1", "#2c2c2c"],
        }
    }
}

/// Escapes `&`, `<`, `>` and `"` for inclusion in HTML text.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// Shark art striped with the flag's colours.
pub fn blahaj_art(flag: BlahajFlag) -> String {
    let stripes = flag.stripes();
    let lines: Vec<&str> = SHARK.lines().collect();
    let body = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let colour = stripes[idx * stripes.len() / lines.len()];
            format!(
                r#"<span style="color:{colour}">{}</span>"#,
                escape_html(line)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(r#"<pre class="blahaj">{body}</pre>"#)
}

/// Logo plus a static system information table.
pub fn neofetch_html() -> String {
    let rows = NEOFETCH_FIELDS
        .iter()
        .map(|(key, value)| {
            format!(
                r#"<tr><td class="neofetch-key">{key}</td><td>{}</td></tr>"#,
                escape_html(value)
            )
        })
        .collect::<String>();
    format!(
        r#"<div class="neofetch"><pre class="neofetch-logo">{}</pre><table><tr><td colspan="2" class="neofetch-title">user@nygosaki</td></tr>{rows}</table></div>"#,
        escape_html(LOGO)
    )
}

pub(super) fn blahaj(ctx: &CommandContext<'_>) -> Result<ShellResponse, ShellError> {
    let flag = BlahajFlag::from_arg(ctx.args.first().copied());
    Ok(ShellResponse::output(CommandOutput::Html(blahaj_art(flag))))
}

pub(super) fn neofetch(_: &CommandContext<'_>) -> Result<ShellResponse, ShellError> {
    Ok(ShellResponse::output(CommandOutput::Html(neofetch_html())))
}

pub(super) fn sudo(_: &CommandContext<'_>) -> Result<ShellResponse, ShellError> {
    Ok(ShellResponse::output(CommandOutput::Html(
        r#"<span class="sudo-refusal">user is not in the sudoers file. This incident will be reported.</span>"#
            .to_string(),
    )))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flag_lookup_falls_back_to_classic() {
        assert_eq!(BlahajFlag::from_arg(Some("TRANS")), BlahajFlag::Trans);
        assert_eq!(BlahajFlag::from_arg(Some("gay")), BlahajFlag::Pride);
        assert_eq!(BlahajFlag::from_arg(Some("enby")), BlahajFlag::Enby);
        assert_eq!(BlahajFlag::from_arg(Some("sparkly")), BlahajFlag::Classic);
        assert_eq!(BlahajFlag::from_arg(None), BlahajFlag::Classic);
    }

    #[test]
    fn blahaj_uses_every_stripe_in_order() {
        let html = blahaj_art(BlahajFlag::Trans);
        assert!(html.starts_with("<pre"));
        let first = html.find("#5bcefa").unwrap();
        let pink = html.find("#f5a9b8").unwrap();
        let white = html.find("#ffffff").unwrap();
        assert!(first < pink && pink < white);
        assert!(html.contains("&lt;"));
        assert!(!html.contains("<  ,"));
    }

    #[test]
    fn escape_html_handles_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn neofetch_lists_every_field() {
        let html = neofetch_html();
        assert!(html.starts_with("<div"));
        for (key, _) in NEOFETCH_FIELDS {
            assert!(html.contains(key), "missing {key}");
        }
    }
}
