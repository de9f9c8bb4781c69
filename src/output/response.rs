//! JSON envelope for command results, plus error → exit code mapping.

use renumber::error::Hint;
use renumber::{Error, ErrorCode, Result};
use serde::Serialize;
use std::io::{self, Write};

/// `{ "success": true, "data": ... }` or `{ "success": false, "error": ... }`.
#[derive(Debug, Serialize)]
struct Envelope<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody<'a>>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    message: &'a str,
    details: &'a serde_json::Value,
    #[serde(skip_serializing_if = "<[Hint]>::is_empty")]
    hints: &'a [Hint],
}

impl<'a> Envelope<'a> {
    fn from_result(result: &'a Result<serde_json::Value>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data.clone()),
                error: None,
            },
            Err(err) => Self {
                success: false,
                data: None,
                error: Some(ErrorBody {
                    code: err.code.as_str(),
                    message: &err.message,
                    details: &err.details,
                    hints: &err.hints,
                }),
            },
        }
    }

    fn render(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::internal_json(e.to_string(), Some("render envelope".to_string())))
    }
}

/// Turn a command result into its JSON payload and process exit code.
pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(e) => (
                Err(Error::internal_json(
                    e.to_string(),
                    Some("serialize command output".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for(err.code);
            (Err(err), exit_code)
        }
    }
}

fn exit_code_for(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigInvalidJson
        | ErrorCode::ConfigInvalidValue
        | ErrorCode::ValidationInvalidArgument => 2,
        ErrorCode::DirectoryNotFound => 4,
        ErrorCode::DirectoryReadFailed | ErrorCode::RenameFailed | ErrorCode::RenameTargetExists => {
            20
        }
        ErrorCode::InternalIoError | ErrorCode::InternalJsonError => 1,
    }
}

/// Print the envelope for `result` to stdout. A closed pipe is not an error.
pub fn print_json_result(result: Result<serde_json::Value>) -> Result<()> {
    let payload = Envelope::from_result(&result).render()?;

    match writeln!(io::stdout().lock(), "{}", payload) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(result: Result<serde_json::Value>) -> serde_json::Value {
        let text = Envelope::from_result(&result).render().unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn error_envelope_has_code_and_hints() {
        let json = render(Err(Error::directory_not_found("proposals")));

        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "directory.not_found");
        assert_eq!(json["error"]["hints"].as_array().unwrap().len(), 1);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn error_without_hints_omits_them() {
        let json = render(Err(Error::rename_failed("a.md", "0001-a.md", "denied")));
        assert!(json["error"].get("hints").is_none());
    }

    #[test]
    fn success_envelope_omits_error() {
        let json = render(Ok(serde_json::json!({ "renamed": 2 })));

        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["renamed"], 2);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn rename_errors_map_to_exit_20() {
        let err = Error::rename_failed("a.md", "0001-a.md", "denied");
        let (value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));

        assert!(value.is_err());
        assert_eq!(exit_code, 20);
    }

    #[test]
    fn usage_and_lookup_errors_have_distinct_exit_codes() {
        assert_eq!(exit_code_for(ErrorCode::DirectoryNotFound), 4);
        assert_eq!(exit_code_for(ErrorCode::ConfigInvalidJson), 2);
        assert_eq!(exit_code_for(ErrorCode::InternalJsonError), 1);
    }

    #[test]
    fn success_keeps_command_exit_code() {
        let (value, exit_code) = map_cmd_result_to_json(Ok((serde_json::json!({}), 0)));
        assert!(value.is_ok());
        assert_eq!(exit_code, 0);
    }
}
