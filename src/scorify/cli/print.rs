use colored::Colorize;
use scorify::api::{CmdMessage, CmdResult, MessageLevel};
use scorify::error::ScorifyError;
use scorify::model::Sale;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const RULE_WIDTH: usize = 80;

pub(super) fn print_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    print_sales(out, &result.listed_sales)?;
    print_messages(out, &result.messages)
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, err: &ScorifyError) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(err.to_string())])
}

pub(super) fn print_list_heading<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "Current Sales:".bold())
}

pub(super) fn print_rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

/// One line per sale, names padded to a shared column width.
fn print_sales<W: Write>(out: &mut W, sales: &[Sale]) -> io::Result<()> {
    let name_width = sales.iter().map(|s| s.name.width()).max().unwrap_or(0);

    for sale in sales {
        let status = if sale.sold {
            sale.status_label().green()
        } else {
            sale.status_label().yellow()
        };
        let padding = name_width.saturating_sub(sale.name.width());

        writeln!(
            out,
            "{} | {} | ${:.2} | {}{} | Tags: {} | Date: {}",
            format!("ID: {}", sale.id).cyan(),
            status,
            sale.price,
            sale.name,
            " ".repeat(padding),
            sale.joined_tags(),
            sale.date
        )?;
    }
    Ok(())
}
