//! Interactive walk through the scenario catalog.
//!
//! The runner owns the console and the [`Session`] aggregate. It never decides
//! anything itself: every number it prints comes from the session, and every
//! commentary line comes from [`trolley_game::evaluate`].
use std::io::{self, BufRead, Write};
use std::time::Duration;

use colored::Colorize;
use thiserror::Error;
use trolley_game::constants::{INTRO_PAUSE_MS, RATING_MAX};
use trolley_game::evaluation::{DEONTOLOGY_HEADING, DOUBLE_EFFECT_HEADING, UTILITARIAN_HEADING};
use trolley_game::{
    Decision, Scenario, Session, SessionError, SessionSummary, TextSpeed, evaluate,
    parse_rating_input,
};

use crate::console::{Console, ConsoleError};
use crate::script;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("session out of step: {0}")]
    Session(#[from] SessionError),
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed(SessionSummary),
    Interrupted,
}

pub struct SessionRunner<R, W> {
    console: Console<R, W>,
    session: Session,
}

impl<R: BufRead, W: Write> SessionRunner<R, W> {
    pub fn new(input: R, output: W, session: Session) -> Self {
        Self {
            console: Console::new(input, output, TextSpeed::default()),
            session,
        }
    }

    /// Play the whole session. A preset speed skips the speed menu.
    ///
    /// Running out of input at any prompt ends the session with the farewell
    /// message and `SessionOutcome::Interrupted`.
    ///
    /// # Errors
    ///
    /// Returns `RunError` when the console cannot be written or read.
    pub fn run(&mut self, preset: Option<TextSpeed>) -> Result<SessionOutcome, RunError> {
        match self.play(preset) {
            Ok(summary) => Ok(SessionOutcome::Completed(summary)),
            Err(RunError::Console(ConsoleError::Interrupted)) => {
                log::info!("session interrupted at {:?}", self.session.progress());
                self.console.writer().line(script::FAREWELL)?;
                Ok(SessionOutcome::Interrupted)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    fn play(&mut self, preset: Option<TextSpeed>) -> Result<SessionSummary, RunError> {
        let speed = match preset {
            Some(speed) => speed,
            None => self.choose_speed()?,
        };
        log::debug!("text speed {speed} ({:?} per character)", speed.delay());
        self.console.writer().set_speed(speed);

        self.intro()?;
        while let Some(scenario) = self.session.current().cloned() {
            self.play_scenario(&scenario)?;
        }

        let summary = self.session.summary();
        self.print_summary(&summary)?;
        Ok(summary)
    }

    fn choose_speed(&mut self) -> Result<TextSpeed, RunError> {
        let writer = self.console.writer();
        writer.say(&script::SPEED_MENU_HEADER.bold().to_string())?;
        for speed in TextSpeed::ALL {
            writer.say(&script::speed_option(speed.menu_key(), speed.label()))?;
        }
        let retry = script::SPEED_RETRY.red().to_string();
        let speed = self
            .console
            .prompt_until(script::SPEED_PROMPT, &retry, TextSpeed::from_menu_key)?;
        self.console
            .writer()
            .say(&script::speed_confirmation(speed.label()))?;
        Ok(speed)
    }

    fn intro(&mut self) -> io::Result<()> {
        let writer = self.console.writer();
        for line in script::INTRO {
            writer.line(line)?;
        }
        writer.pause(Duration::from_millis(INTRO_PAUSE_MS));
        Ok(())
    }

    fn play_scenario(&mut self, scenario: &Scenario) -> Result<(), RunError> {
        let writer = self.console.writer();
        writer.line(&script::scenario_heading(&scenario.name))?;
        writer.line(&scenario.description)?;
        for line in script::DECISION_MENU {
            writer.line(line)?;
        }

        let retry = script::DECISION_RETRY.red().to_string();
        let decision =
            self.console
                .prompt_until(script::DECISION_PROMPT, &retry, Decision::from_menu_key)?;
        let record = self.session.decide(decision)?.clone();
        self.console.writer().line(&script::decision_confirmation(
            record.decision == Decision::Intervene,
            record.saved,
            record.killed,
        ))?;

        self.print_evaluation(scenario, record.saved, record.killed)?;

        let retry = script::RATING_RETRY.red().to_string();
        let rating = self
            .console
            .prompt_until(script::RATING_PROMPT, &retry, |input| {
                parse_rating_input(input).ok()
            })?;
        self.session.complete_scenario(rating)?;

        self.console.read_line(script::CONTINUE_PROMPT)?;
        Ok(())
    }

    fn print_evaluation(&mut self, scenario: &Scenario, saved: u32, killed: u32) -> io::Result<()> {
        let evaluation = evaluate(scenario.kind, saved, killed);
        let writer = self.console.writer();
        writer.say(&script::EVALUATION_OPEN.yellow().to_string())?;

        let sections = [
            (UTILITARIAN_HEADING, &evaluation.utilitarian),
            (DEONTOLOGY_HEADING, &evaluation.deontology),
            (DOUBLE_EFFECT_HEADING, &evaluation.double_effect),
        ];
        let last = sections.len() - 1;
        for (idx, (heading, lines)) in sections.into_iter().enumerate() {
            writer.line(heading)?;
            for line in lines {
                writer.line(line)?;
            }
            if idx != last {
                writer.say("")?;
            }
        }

        writer.say(&script::EVALUATION_CLOSE.yellow().to_string())
    }

    fn print_summary(&mut self, summary: &SessionSummary) -> io::Result<()> {
        let writer = self.console.writer();
        writer.line(script::SUMMARY_HEADER)?;
        writer.line(&script::totals_line(
            summary.stats.saved,
            summary.stats.killed,
        ))?;
        match &summary.most_uncomfortable {
            Some(worst) => writer.line(&script::worst_line(
                &worst.scenario_name,
                worst.rating.value(),
                RATING_MAX,
            ))?,
            None => writer.line(script::NO_RATINGS)?,
        }
        for line in script::FINAL_LESSON {
            writer.line(line)?;
        }
        Ok(())
    }
}
