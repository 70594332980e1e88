use crate::conf::validation::ListenerError;
use std::fmt;

/// Collects listener errors across blocks, tagged with the block key.
#[derive(Debug, Default)]
pub struct ValidationCtx {
    issues: Vec<ListenerIssue>,
}

impl ValidationCtx {
    pub fn push(&mut self, key: &str, error: ListenerError) {
        self.issues.push(ListenerIssue {
            key: key.to_owned(),
            error,
        });
    }

    pub fn merge(&mut self, errors: ListenerErrors) {
        self.issues.extend(errors.0);
    }

    pub fn into_result(self) -> Result<(), ListenerErrors> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ListenerErrors(self.issues))
        }
    }
}

/// One error and the listener block it came from.
#[derive(Debug)]
pub struct ListenerIssue {
    pub key: String,
    pub error: ListenerError,
}

impl ListenerIssue {
    pub fn context(&self) -> String {
        format!("listeners.{}", self.key)
    }
}

impl fmt::Display for ListenerIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context(), self.error)
    }
}

/// Every listener error found in one configuration load.
#[derive(Debug)]
pub struct ListenerErrors(pub Vec<ListenerIssue>);

impl ListenerErrors {
    pub fn single(key: &str, error: ListenerError) -> Self {
        Self(vec![ListenerIssue {
            key: key.to_owned(),
            error,
        }])
    }

    pub fn issues(&self) -> &[ListenerIssue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rendered `listeners.<key>: <message>` lines.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ListenerErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [issue] = self.0.as_slice() {
            return write!(f, "1 error occurred:\n\t* {issue}\n");
        }

        writeln!(f, "{} errors occurred:", self.0.len())?;
        for issue in &self.0 {
            writeln!(f, "\t* {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ListenerErrors {}
