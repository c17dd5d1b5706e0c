//! Message flags

use std::{fs, num::NonZeroUsize, path::PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use mailpost::domain::communication::{ContentAttachment, Contact, Email, UrlAttachment};
use serde_json::{Map, Value};

/// The email to send
#[derive(Clone, Debug, Parser)]
#[command(group(ArgGroup::new("body").required(true).args(["html", "text", "template_id"])))]
pub struct MessageArgs {
    /// Sender email address
    #[arg(long, env = "MAIL_FROM")]
    pub from: Option<String>,

    /// Sender display name
    #[arg(long, env = "MAIL_FROM_NAME", requires = "from")]
    pub from_name: Option<String>,

    /// Recipient email address
    #[arg(long, required = true)]
    pub to: Vec<String>,

    /// Carbon copy recipient email address
    #[arg(long)]
    pub cc: Vec<String>,

    /// Blind carbon copy recipient email address
    #[arg(long)]
    pub bcc: Vec<String>,

    /// Subject line
    #[arg(long)]
    pub subject: Option<String>,

    /// Reply-to email address
    #[arg(long, env = "MAIL_REPLY_TO")]
    pub reply_to: String,

    /// Reply-to display name
    #[arg(long, env = "MAIL_REPLY_TO_NAME")]
    pub reply_to_name: Option<String>,

    /// HTML body
    #[arg(long)]
    pub html: Option<String>,

    /// Plain text body
    #[arg(long)]
    pub text: Option<String>,

    /// Provider template id
    #[arg(long)]
    pub template_id: Option<i64>,

    /// Template parameters as a JSON object
    #[arg(long, requires = "template_id")]
    pub params: Option<String>,

    /// File to attach
    #[arg(long)]
    pub attach: Vec<PathBuf>,

    /// URL of a file to attach
    #[arg(long)]
    pub attach_url: Vec<String>,

    /// Tag
    #[arg(long)]
    pub tag: Vec<String>,

    /// Send one email per this many attachments
    #[arg(long)]
    pub chunk_size: Option<NonZeroUsize>,
}

impl TryFrom<MessageArgs> for Email {
    type Error = anyhow::Error;

    fn try_from(args: MessageArgs) -> Result<Self> {
        let mut builder = Email::builder()
            .subject(args.subject.as_deref().unwrap_or_default())
            .reply_to(Contact::new(&args.reply_to, args.reply_to_name.as_deref()));

        if let Some(from) = &args.from {
            builder = builder.from(Contact::new(from, args.from_name.as_deref()));
        }

        builder = args
            .to
            .iter()
            .fold(builder, |b, to| b.append_to(Contact::new(to, None)));
        builder = args
            .cc
            .iter()
            .fold(builder, |b, cc| b.append_cc(Contact::new(cc, None)));
        builder = args
            .bcc
            .iter()
            .fold(builder, |b, bcc| b.append_bcc(Contact::new(bcc, None)));

        builder = match (args.html, args.text, args.template_id) {
            (Some(html), _, _) => builder.body().html(&html),
            (_, Some(text), _) => builder.body().plain_text(&text),
            (_, _, Some(id)) => builder.body().template(id, parse_params(args.params.as_deref())?),
            (None, None, None) => builder,
        };

        for path in &args.attach {
            let content =
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            builder = builder.append_attachment(ContentAttachment::new(&filename, content));
        }

        builder = args.attach_url.iter().fold(builder, |b, url| {
            b.append_attachment(UrlAttachment::new(url, None))
        });

        builder = args
            .tag
            .iter()
            .fold(builder, |b, tag| b.append_tag(tag.as_str()));

        Ok(builder.build())
    }
}

fn parse_params(raw: Option<&str>) -> Result<Option<Map<String, Value>>> {
    raw.map(|raw| serde_json::from_str(raw).context("--params must be a JSON object"))
        .transpose()
}
