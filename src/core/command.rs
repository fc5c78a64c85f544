use crate::core::form::{FormState, Mode};
use crate::core::format::to_text;
use crate::domain::model::{DocumentKind, Field};
use crate::domain::ports::Storage;
use crate::utils::error::{ContractError, Result};

pub const HELP: &str = "\
Commands:
  set <field> <value...>   fill in a field
  clear <field>            empty a field
  kind <service|freelancer|nda>
  show                     list the form for the current kind
  generate | preview       render the document
  edit                     go back to editing
  print [file]             write the previewed document as HTML
  fields                   list field keys
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: Field, value: String },
    Clear(Field),
    Kind(DocumentKind),
    Show,
    Generate,
    Edit,
    Print(Option<String>),
    Fields,
    Help,
    Quit,
}

/// 解析互動模式的一行輸入；空白行回傳 `None`
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let raw = line.trim_start().trim_end_matches(['\r', '\n']);
    let line = raw.trim_end();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, raw_rest) = match raw.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (line, ""),
    };
    let rest = raw_rest.trim_end();

    let command = match verb.to_lowercase().as_str() {
        // 值保持原樣，只去掉欄位名稱後的一個分隔字元
        "set" => {
            let (key, value) = match raw_rest.split_once(char::is_whitespace) {
                Some((key, value)) => (key, value),
                None => (rest, ""),
            };
            if key.is_empty() {
                return Err(ContractError::MissingConfigError {
                    field: "field name".to_string(),
                });
            }
            Command::Set {
                field: key.parse()?,
                value: value.to_string(),
            }
        }
        "clear" => Command::Clear(rest.parse()?),
        "kind" => Command::Kind(rest.parse()?),
        "show" => Command::Show,
        "generate" | "preview" => Command::Generate,
        "edit" | "back" => Command::Edit,
        "print" => Command::Print((!rest.is_empty()).then(|| rest.to_string())),
        "fields" => Command::Fields,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => {
            return Err(ContractError::InvalidAssignmentError {
                input: line.to_string(),
            })
        }
    };

    Ok(Some(command))
}

/// Outcome of one command, for the shell to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Document(String),
    Quit,
}

pub const DEFAULT_PRINT_FILE: &str = "contrato.html";

pub fn execute<S: Storage>(state: &mut FormState, command: Command, storage: &S) -> Result<Reply> {
    let reply = match command {
        Command::Set { field, value } => {
            state.set_field(field, value);
            Reply::Message(format!("{} = {:?}", field, state.draft().get(field)))
        }
        Command::Clear(field) => {
            state.set_field(field, "");
            Reply::Message(format!("{} cleared", field))
        }
        Command::Kind(kind) => {
            state.set_document_kind(kind);
            Reply::Message(format!("Document kind: {} ({})", kind.label(), kind))
        }
        Command::Show => Reply::Message(describe_form(state)),
        Command::Generate => {
            let document = state.generate();
            Reply::Document(to_text(&document))
        }
        Command::Edit => {
            state.back_to_edit();
            Reply::Message("Editing".to_string())
        }
        Command::Print(file) => {
            let file = file.unwrap_or_else(|| DEFAULT_PRINT_FILE.to_string());
            match state.print(storage, &file)? {
                Some(location) => Reply::Message(format!("Saved printable document to {}", location)),
                None => Reply::Message("Nothing to print: run 'generate' first".to_string()),
            }
        }
        Command::Fields => Reply::Message(
            Field::ALL
                .iter()
                .map(|field| format!("{:<22} {}", field.key(), field.label()))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        Command::Help => Reply::Message(HELP.to_string()),
        Command::Quit => Reply::Quit,
    };
    Ok(reply)
}

fn describe_form(state: &FormState) -> String {
    let mode = match state.mode() {
        Mode::Editing => "editing",
        Mode::Previewing => "previewing",
    };
    let mut lines = vec![format!(
        "{} ({}) - {}",
        state.kind().label(),
        state.kind(),
        mode
    )];
    for section in state.form_sections() {
        lines.push(format!("  {}", section.title));
        for (field, label) in section.fields {
            let value = state.draft().get(field);
            let shown = if value.is_empty() { field.hint() } else { value };
            lines.push(format!("    {:<22} {}: {}", field.key(), label, shown));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockStorage {
        written: RefCell<Vec<String>>,
    }

    impl Storage for MockStorage {
        fn write_file(&self, path: &str, _data: &[u8]) -> Result<String> {
            self.written.borrow_mut().push(path.to_string());
            Ok(path.to_string())
        }
    }

    fn run(state: &mut FormState, storage: &MockStorage, line: &str) -> Reply {
        let command = parse_command(line).unwrap().unwrap();
        execute(state, command, storage).unwrap()
    }

    #[test]
    fn test_session_flow() {
        let storage = MockStorage::default();
        let mut state = FormState::new();

        run(&mut state, &storage, "set client_name Carla Dias");
        run(&mut state, &storage, "kind freelancer");
        assert_eq!(
            run(&mut state, &storage, "print"),
            Reply::Message("Nothing to print: run 'generate' first".to_string())
        );

        let Reply::Document(text) = run(&mut state, &storage, "generate") else {
            panic!("expected a document");
        };
        assert!(text.contains("Carla Dias"));
        assert!(text.contains("FREELANCER"));
        assert_eq!(state.mode(), Mode::Previewing);

        run(&mut state, &storage, "print nda.html");
        assert_eq!(*storage.written.borrow(), vec!["nda.html".to_string()]);

        run(&mut state, &storage, "edit");
        assert_eq!(state.mode(), Mode::Editing);
        assert_eq!(run(&mut state, &storage, "quit"), Reply::Quit);
    }

    #[test]
    fn test_show_lists_nda_section() {
        let storage = MockStorage::default();
        let mut state = FormState::new();
        run(&mut state, &storage, "kind nda");
        let Reply::Message(text) = run(&mut state, &storage, "show") else {
            panic!("expected a message");
        };
        assert!(text.contains("TERMOS DE CONFIDENCIALIDADE"));
        assert!(text.contains("2 anos"));
        assert!(!text.contains("OBJETO DO CONTRATO"));
    }

    #[test]
    fn test_parse_set_keeps_inner_spaces() {
        let command = parse_command("set client_name Maria da Silva Souza").unwrap();
        assert_eq!(
            command,
            Some(Command::Set {
                field: Field::ClientName,
                value: "Maria da Silva Souza".to_string()
            })
        );
    }

    #[test]
    fn test_parse_set_keeps_surrounding_whitespace_of_value() {
        let command = parse_command("set client_tax_id  123 \n").unwrap();
        assert_eq!(
            command,
            Some(Command::Set {
                field: Field::ClientTaxId,
                value: " 123 ".to_string()
            })
        );

        let command = parse_command("set venue    ").unwrap();
        assert_eq!(
            command,
            Some(Command::Set {
                field: Field::Venue,
                value: "   ".to_string()
            })
        );
    }

    #[test]
    fn test_parse_set_without_value_empties_field() {
        let command = parse_command("set price").unwrap();
        assert_eq!(
            command,
            Some(Command::Set {
                field: Field::Price,
                value: String::new()
            })
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(
            parse_command("kind nda").unwrap(),
            Some(Command::Kind(DocumentKind::Nda))
        );
        assert_eq!(parse_command("PREVIEW").unwrap(), Some(Command::Generate));
        assert_eq!(parse_command("edit").unwrap(), Some(Command::Edit));
        assert_eq!(parse_command("print").unwrap(), Some(Command::Print(None)));
        assert_eq!(
            parse_command("print nda.html").unwrap(),
            Some(Command::Print(Some("nda.html".to_string())))
        );
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(parse_command("# comment").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_command("set preco 10"),
            Err(ContractError::UnknownFieldError { .. })
        ));
        assert!(matches!(
            parse_command("kind lease"),
            Err(ContractError::UnknownKindError { .. })
        ));
        assert!(matches!(
            parse_command("jump"),
            Err(ContractError::InvalidAssignmentError { .. })
        ));
        assert!(matches!(
            parse_command("set"),
            Err(ContractError::MissingConfigError { .. })
        ));
    }
}
