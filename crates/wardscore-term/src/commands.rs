use wardscore_core::models::parameter::ParameterKind;

use crate::error::BoardError;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add,
    Remove { bed: String },
    Set { bed: String, kind: ParameterKind, value: String },
    Rename { bed: String, label: String },
    Clear,
    Strict(bool),
    CellsFollowBand(bool),
    Show,
    Print,
    Reference,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Command, BoardError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(BoardError::Usage("type a command, or 'help'"));
    };
    let rest: Vec<&str> = words.collect();

    match head.to_ascii_lowercase().as_str() {
        "add" => Ok(Command::Add),
        "rm" => match rest.as_slice() {
            [bed] => Ok(Command::Remove {
                bed: (*bed).to_string(),
            }),
            _ => Err(BoardError::Usage("rm <bed>")),
        },
        "set" => match rest.as_slice() {
            [bed, field] => set_command(bed, field, ""),
            [bed, field, value] => set_command(bed, field, value),
            _ => Err(BoardError::Usage("set <bed> <field> [value]")),
        },
        "bed" => match rest.as_slice() {
            [bed, label] => Ok(Command::Rename {
                bed: (*bed).to_string(),
                label: (*label).to_string(),
            }),
            _ => Err(BoardError::Usage("bed <bed> <new-label>")),
        },
        "clear" => Ok(Command::Clear),
        "strict" => match rest.as_slice() {
            ["on"] => Ok(Command::Strict(true)),
            ["off"] => Ok(Command::Strict(false)),
            _ => Err(BoardError::Usage("strict on|off")),
        },
        "cells" => match rest.as_slice() {
            ["band"] => Ok(Command::CellsFollowBand(true)),
            ["own"] => Ok(Command::CellsFollowBand(false)),
            _ => Err(BoardError::Usage("cells band|own")),
        },
        "show" => Ok(Command::Show),
        "print" => Ok(Command::Print),
        "ref" => Ok(Command::Reference),
        "help" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(BoardError::UnknownCommand(other.to_string())),
    }
}

fn set_command(bed: &str, field: &str, value: &str) -> Result<Command, BoardError> {
    let kind = ParameterKind::from_id(&field.to_ascii_lowercase())
        .ok_or_else(|| BoardError::UnknownField(field.to_string()))?;
    Ok(Command::Set {
        bed: bed.to_string(),
        kind,
        value: value.to_string(),
    })
}

pub fn help_text() -> &'static str {
    "commands:
  add                       add a bed row
  rm <bed>                  remove a bed row
  set <bed> <field> [value] set a field; omit the value to clear it
                            fields: rr spo2 o2 hr sbp temp avpu
  bed <bed> <new-label>     relabel a bed
  clear                     clear every field, keep the rows
  strict on|off             withhold banding while data is incomplete
  cells band|own            colour cells with the overall band, or each
                            cell's own zone
  show                      repaint the board
  print                     printable snapshot with a timestamp footer
  ref                       scoring reference card
  quit                      leave"
}
