use std::io::{self, BufRead, Write};

use air_catalog::{Catalog, CatalogError};
use air_core::{PathwayProgress, ReadinessError, ScoringEngine, ScoringInput};
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::HostConfig;
use crate::protocol::{Request, Response, ScoreRequest, SimulateRequest};

#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Scoring(#[from] ReadinessError),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
}

pub struct Host {
    config: HostConfig,
    catalog: Catalog,
    engine: ScoringEngine,
}

impl Host {
    pub fn new(config: HostConfig) -> Result<Self, HostError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };
        tracing::info!(
            occupations = catalog.occupations().len(),
            pathways = catalog.pathways().len(),
            "catalog loaded"
        );
        Ok(Self::with_catalog(config, catalog))
    }

    pub fn with_catalog(config: HostConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog,
            engine: ScoringEngine::new(),
        }
    }

    pub fn handle(&self, request: Request) -> Response {
        let outcome = match request {
            Request::Score(req) => self.score(&req),
            Request::Simulate(req) => self.simulate(&req),
            Request::Catalog => Ok(self.describe_catalog()),
        };
        match outcome {
            Ok(result) => Response::success(result),
            Err(err) => {
                tracing::warn!(error = %err, "request failed");
                Response::error(err.to_string())
            }
        }
    }

    pub fn handle_line(&self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request),
            Err(err) => Response::error(format!("parse error: {err}")),
        }
    }

    /// Line-delimited JSON: one request per line in, one response per line out.
    pub fn serve<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> io::Result<()> {
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let response = self.handle_line(trimmed);
            let body = serde_json::to_string(&response).map_err(io::Error::other)?;
            writeln!(writer, "{body}")?;
            writer.flush()?;
        }
        Ok(())
    }

    pub fn serve_stdio(&self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    fn score(&self, req: &ScoreRequest) -> Result<Value, HostError> {
        let input = self.resolve_input(req)?;
        let report = self.engine.score(&input)?;
        Ok(serde_json::to_value(report)?)
    }

    fn simulate(&self, req: &SimulateRequest) -> Result<Value, HostError> {
        let input = self.resolve_input(&req.score)?;
        let pathway = self.catalog.pathway(&req.pathway)?;
        let report = self.engine.simulate(
            &input,
            pathway,
            PathwayProgress::new(req.completion, req.mastery),
        )?;
        let deltas = report.deltas();
        let mut value = serde_json::to_value(report)?;
        if let Value::Object(map) = &mut value {
            map.insert("deltas".to_string(), serde_json::to_value(deltas)?);
        }
        Ok(value)
    }

    fn resolve_input(&self, req: &ScoreRequest) -> Result<ScoringInput, HostError> {
        let tuning = req
            .tuning
            .map_or(self.config.tuning, |patch| patch.apply(self.config.tuning));
        let mut input = match (&req.profile, &req.individual_id) {
            (Some(profile), _) => self.catalog.scoring_input(
                profile.clone(),
                &req.occupation,
                Vec::new(),
                tuning,
            )?,
            (None, Some(id)) => self
                .catalog
                .stored_scoring_input(id, &req.occupation, tuning)?,
            (None, None) => {
                return Err(HostError::BadRequest(
                    "either profile or individual_id is required".to_string(),
                ))
            }
        };
        if let Some(skills) = &req.individual_skills {
            input.individual_skills.clone_from(skills);
        }
        Ok(input)
    }

    fn describe_catalog(&self) -> Value {
        json!({
            "occupations": self
                .catalog
                .occupations()
                .iter()
                .map(|o| o.occupation_name.as_str())
                .collect::<Vec<_>>(),
            "pathways": self
                .catalog
                .pathways()
                .iter()
                .map(|p| json!({"pathway_id": p.pathway_id, "pathway_name": p.pathway_name}))
                .collect::<Vec<_>>(),
            "individuals": self
                .catalog
                .profiles()
                .iter()
                .map(|p| p.individual_id.as_str())
                .collect::<Vec<_>>(),
            "tuning": self.config.tuning,
        })
    }
}
