//! Overload resolution over a named candidate set.
//!
//! A [`CandidateSet`] holds every signature registered under one function
//! name, each paired with its own [`TypeBinding`]. Argument types are fed
//! in one at a time; after each one the set rescores all candidates over
//! the full argument prefix and tracks the current most specific winner.
//!
//! Scoring: each argument that converts to its declared parameter earns
//! `2 - rank/2` points (cheaper conversions score higher); an argument that
//! cannot convert voids the candidate. Arguments are graded against the
//! candidate's *bound* signature, so a generic slot specialized by an
//! earlier argument constrains the later ones. A candidate whose binding
//! accepted the argument additionally earns its arity as a bonus, which
//! favors signatures that actually constrained a variable. Ties keep the
//! earlier candidate selected but mark the winner as not unique;
//! registration order is the documented precedence.

use feel_types::FType;
use tracing::{debug, trace};

use crate::binding::TypeBinding;
use crate::error::ResolveError;

struct Candidate {
    binding: TypeBinding,
    score: f64,
}

/// The overloads of one function name, with argument-driven selection.
pub struct CandidateSet {
    name: String,
    candidates: Vec<Candidate>,
    args: Vec<(Option<String>, FType)>,
    selected: usize,
    unique: bool,
}

impl CandidateSet {
    /// Build a set from the signatures registered under `name`, in
    /// precedence order. The set must be non-empty and every signature must
    /// be a function type.
    pub fn new(
        name: impl Into<String>,
        signatures: impl IntoIterator<Item = FType>,
    ) -> Result<Self, ResolveError> {
        let name = name.into();
        let mut candidates = Vec::new();
        for signature in signatures {
            let binding = TypeBinding::of(&signature).map_err(|source| {
                ResolveError::InvalidCandidate {
                    name: name.clone(),
                    source,
                }
            })?;
            candidates.push(Candidate {
                binding,
                score: 0.0,
            });
        }
        if candidates.is_empty() {
            return Err(ResolveError::EmptyCandidateSet { name });
        }
        let unique = candidates.len() == 1;
        Ok(Self {
            name,
            candidates,
            args: Vec::new(),
            selected: 0,
            unique,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The currently selected signature with all bindings applied. Before
    /// any argument is pushed this is the first registered signature.
    pub fn most_specific(&self) -> FType {
        self.candidates[self.selected].binding.bound()
    }

    /// True when the last rescoring produced a single strict winner.
    pub fn has_unique_winner(&self) -> bool {
        self.unique
    }

    /// Feed the next positional argument type.
    pub fn push_arg(&mut self, ty: FType) {
        self.args.push((None, ty));
        self.rescore();
    }

    /// Feed the next named argument type.
    pub fn push_named_arg(&mut self, name: impl Into<String>, ty: FType) {
        self.args.push((Some(name.into()), ty));
        self.rescore();
    }

    /// Drop all fed arguments and bindings, keeping the candidates.
    pub fn reset_args(&mut self) {
        self.args.clear();
        for candidate in &mut self.candidates {
            candidate.binding.reset();
            candidate.score = 0.0;
        }
        self.selected = 0;
        self.unique = self.candidates.len() == 1;
    }

    fn rescore(&mut self) {
        // Named matching only applies when every argument carries a name;
        // any positional argument forces positional matching throughout.
        let all_named = self.args.iter().all(|(name, _)| name.is_some());
        let Some((last_name, last_ty)) = self.args.last().cloned() else {
            return;
        };

        let mut max_score = 0.0_f64;
        for (index, candidate) in self.candidates.iter_mut().enumerate() {
            let template = candidate.binding.template().clone();
            let named = all_named && template.params.iter().all(|p| p.name.is_some());

            let accepted = if named {
                if let Some(name) = &last_name {
                    candidate
                        .binding
                        .bind_parameter_named(name, &last_ty)
                        .unwrap_or(false)
                } else {
                    false
                }
            } else {
                candidate
                    .binding
                    .bind_parameter_type(self.args.len() - 1, &last_ty)
                    .unwrap_or(false)
            };

            // Grade against the specialized signature: variables bound by
            // earlier arguments now constrain the later ones.
            let FType::Function(bound) = candidate.binding.bound() else {
                continue;
            };

            let mut score = if accepted { template.arity() as f64 } else { 0.0 };
            let mut applicable = true;
            for (position, (arg_name, arg_ty)) in self.args.iter().enumerate() {
                let declared = if named {
                    arg_name
                        .as_deref()
                        .and_then(|n| bound.param_index(n))
                        .and_then(|i| bound.param_type(i))
                } else {
                    bound.param_type(position)
                };
                match declared.and_then(|d| arg_ty.conversion(d)) {
                    Some(grade) => score += 2.0 - 0.5 * f64::from(grade.rank()),
                    None => {
                        applicable = false;
                        break;
                    }
                }
            }
            if !applicable {
                score = 0.0;
            }
            candidate.score = score;
            trace!(name = %self.name, candidate = index, score, "candidate scored");

            if score > max_score {
                max_score = score;
                self.selected = index;
                self.unique = true;
            } else if score == max_score {
                self.unique = false;
            }
        }
        debug!(
            name = %self.name,
            selected = self.selected,
            unique = self.unique,
            "most specific updated"
        );
    }
}

#[cfg(test)]
#[path = "../tests/candidates_tests.rs"]
mod tests;
