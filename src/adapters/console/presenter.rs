use crate::application::{AppError, AppResult, Step, UserService};
use crate::domain::{ErrorCode, User, UserDomainError};
use std::io::{self, Write};

/// Human readable line for the outcome of a step.
pub fn outcome_line(step: Step, result: &AppResult<()>) -> String {
    match result {
        Ok(()) => match step {
            Step::Register => "User registered successfully.".to_string(),
            Step::Activate => "User activated successfully.".to_string(),
        },
        Err(err) => error_line(err),
    }
}

pub fn error_line(err: &AppError) -> String {
    match err.as_domain() {
        Some(domain) => match domain.code() {
            ErrorCode::UserNotRegistered => "Error: User must be registered first.".to_string(),
            ErrorCode::UserAlreadyActivated => "Error: User already activated.".to_string(),
        },
        None => format!("Unexpected error: {err}"),
    }
}

pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Classified report: branch on the error code
    pub fn report(&mut self, step: Step, result: &AppResult<()>) -> io::Result<()> {
        writeln!(self.out, "{}", outcome_line(step, result))
    }

    /// Direct report: print the error's own description, stay quiet on success
    pub fn report_raw(&mut self, result: &AppResult<()>) -> io::Result<()> {
        if let Err(err) = result {
            let line = err
                .as_domain()
                .map(UserDomainError::describe)
                .unwrap_or_else(|| err.to_string());
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    pub fn print_json(&mut self, user: &User) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, user)?;
        writeln!(self.out)
    }

    /// Activate before registering, then register and activate.
    pub fn run_demo(&mut self, service: &mut UserService) -> io::Result<()> {
        let result = service.activate();
        self.report(Step::Activate, &result)?;

        let result = service.register();
        self.report_raw(&result)?;

        let result = service.activate();
        match result {
            Ok(()) => self.report(Step::Activate, &result),
            Err(_) => self.report_raw(&result),
        }
    }

    /// Apply each named step in order; failures do not stop later steps.
    pub fn run_steps<S: AsRef<str>>(
        &mut self,
        service: &mut UserService,
        names: &[S],
    ) -> io::Result<()> {
        for name in names {
            let name = name.as_ref();
            let outcome = match service.apply_named(name) {
                Ok(step) => outcome_line(step, &Ok(())),
                Err(err) => error_line(&err),
            };
            tracing::debug!(step = name, %outcome, "step applied");
            writeln!(self.out, "{outcome}")?;
        }
        Ok(())
    }
}
