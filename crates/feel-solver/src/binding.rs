//! Generic template binding.
//!
//! A [`TypeBinding`] wraps one immutable function template and accumulates
//! substitutions as call-site argument types are bound against declared
//! parameter slots. Named type variables share one table across the whole
//! template; every variable occurrence renders to the same binding. Each
//! `any` occurrence and each unconstrained range boundary pair is instead a
//! local *hole*, keyed by its position, so binding one `any` slot never
//! disturbs another.
//!
//! `bound` always re-renders the original template from the tables, never
//! patches a previous result, which makes the outcome independent of the
//! order bindings arrive in. Rebinding a variable is last-write-wins.

use std::sync::Arc;

use feel_types::{FType, FunctionType, Param, TypeVar};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::BindError;

/// Position of a hole inside the template: the slot (0 = return type,
/// `i + 1` = parameter `i`) and the pre-order occurrence index within it.
type HoleId = (u32, u32);

/// Mutable binding state over one function template.
///
/// Single-writer: one instance serves one resolution attempt on one thread.
/// [`TypeBinding::reset`] returns it to the fully generic template.
#[derive(Debug, Clone)]
pub struct TypeBinding {
    template: Arc<FunctionType>,
    vars: FxHashMap<TypeVar, FType>,
    holes: FxHashMap<HoleId, FType>,
    range_bounds: FxHashMap<HoleId, (Option<bool>, Option<bool>)>,
}

impl TypeBinding {
    /// Wrap a function type as a binding template.
    pub fn of(ty: &FType) -> Result<Self, BindError> {
        let FType::Function(template) = ty else {
            return Err(BindError::NotAFunction { found: ty.clone() });
        };
        if template.variadic
            && !matches!(template.params.last().map(|p| &p.ty), Some(FType::List(_)))
        {
            return Err(BindError::InvalidVariadicTail {
                template: ty.clone(),
            });
        }
        Ok(Self {
            template: Arc::clone(template),
            vars: FxHashMap::default(),
            holes: FxHashMap::default(),
            range_bounds: FxHashMap::default(),
        })
    }

    /// The original, fully generic template.
    pub fn template(&self) -> &FunctionType {
        &self.template
    }

    /// Bind the declared return type against `concrete`. Returns whether
    /// any variable or hole changed.
    pub fn bind_return_type(&mut self, concrete: &FType) -> Result<bool, BindError> {
        let declared = self.template.return_type.clone();
        self.bind_slot(0, &declared, concrete)
    }

    /// Bind the declared parameter at `index` against `concrete`.
    ///
    /// Indices at or past the fixed arity of a variadic template bind the
    /// tail's element type; on a non-variadic template they are an error.
    /// A non-list argument at the tail's own index also binds the element,
    /// so a single scattered argument solves the same variables the
    /// overflow positions do. A list argument there unifies against the
    /// whole declared tail first, falling back to the element when the
    /// shapes disagree (a list argument feeding a list-of-lists tail).
    pub fn bind_parameter_type(
        &mut self,
        index: usize,
        concrete: &FType,
    ) -> Result<bool, BindError> {
        let arity = self.template.params.len();
        if index < arity {
            let declared = self.template.params[index].ty.clone();
            if self.template.variadic && index + 1 == arity {
                if let FType::List(tail) = &declared {
                    if matches!(concrete, FType::List(_)) {
                        // Attempt on a scratch copy so a shape mismatch
                        // leaves the tables untouched before the element
                        // fallback below.
                        let mut attempt = self.clone();
                        if let Ok(changed) =
                            attempt.bind_slot(index as u32 + 1, &declared, concrete)
                        {
                            *self = attempt;
                            return Ok(changed);
                        }
                    }
                    let element = tail.element.clone();
                    return self.bind_slot(index as u32 + 1, &element, concrete);
                }
            }
            return self.bind_slot(index as u32 + 1, &declared, concrete);
        }
        if self.template.variadic {
            // Overflow arguments all match the tail's element type; the
            // constructor has checked that the tail is a list.
            if let Some(FType::List(tail)) = self.template.params.last().map(|p| &p.ty) {
                let declared = tail.element.clone();
                return self.bind_slot(arity as u32, &declared, concrete);
            }
        }
        Err(BindError::ParameterOutOfRange { index, arity })
    }

    /// Bind a parameter by name. Returns `Ok(false)` when the template has
    /// no parameter of that name.
    pub fn bind_parameter_named(
        &mut self,
        name: &str,
        concrete: &FType,
    ) -> Result<bool, BindError> {
        match self.template.param_index(name) {
            Some(index) => self.bind_parameter_type(index, concrete),
            None => Ok(false),
        }
    }

    /// Bind each argument type positionally, left to right.
    pub fn bind_arguments(&mut self, args: &[FType]) -> Result<bool, BindError> {
        let mut changed = false;
        for (index, arg) in args.iter().enumerate() {
            changed |= self.bind_parameter_type(index, arg)?;
        }
        Ok(changed)
    }

    /// Discard all substitutions.
    pub fn reset(&mut self) {
        debug!(template = %FType::Function(Arc::clone(&self.template)), "binding reset");
        self.vars.clear();
        self.holes.clear();
        self.range_bounds.clear();
    }

    /// The template with every known substitution applied. Unbound
    /// variables and holes render as themselves.
    pub fn bound(&self) -> FType {
        let mut occ = 0;
        let return_type = self.render(0, &self.template.return_type, &mut occ);
        let params = self
            .template
            .params
            .iter()
            .enumerate()
            .map(|(i, param)| {
                let mut occ = 0;
                Param {
                    name: param.name.clone(),
                    ty: self.render(i as u32 + 1, &param.ty, &mut occ),
                }
            })
            .collect();
        FType::Function(Arc::new(FunctionType {
            return_type,
            params,
            variadic: self.template.variadic,
        }))
    }

    fn bind_slot(&mut self, slot: u32, declared: &FType, concrete: &FType) -> Result<bool, BindError> {
        let mut occ = 0;
        let mut changed = false;
        self.bind_at(slot, declared, concrete, &mut occ, &mut changed)?;
        Ok(changed)
    }

    /// Unify one declared subtree with a concrete type.
    ///
    /// The occurrence counter must advance exactly as [`Self::render`] does
    /// over the same subtree, including over parts this walk skips.
    fn bind_at(
        &mut self,
        slot: u32,
        declared: &FType,
        concrete: &FType,
        occ: &mut u32,
        changed: &mut bool,
    ) -> Result<(), BindError> {
        match declared {
            FType::Var(var) => {
                let previous = self.vars.insert(*var, concrete.clone());
                if previous.as_ref() != Some(concrete) {
                    trace!(var = %var, bound = %concrete, "variable bound");
                    *changed = true;
                }
                Ok(())
            }
            FType::Any => {
                let id = (slot, *occ);
                *occ += 1;
                let previous = self.holes.insert(id, concrete.clone());
                if previous.as_ref() != Some(concrete) {
                    trace!(slot, occurrence = id.1, bound = %concrete, "hole filled");
                    *changed = true;
                }
                Ok(())
            }
            FType::List(list) => match concrete {
                FType::List(found) => {
                    self.bind_at(slot, &list.element, &found.element, occ, changed)
                }
                _ => Err(BindError::ShapeMismatch {
                    declared: declared.clone(),
                    concrete: concrete.clone(),
                }),
            },
            FType::Range(range) => {
                let id = (slot, *occ);
                *occ += 1;
                match concrete {
                    FType::Range(found) => {
                        let unconstrained =
                            range.start_inclusive.is_none() && range.end_inclusive.is_none();
                        let found_bounds = (found.start_inclusive, found.end_inclusive);
                        if unconstrained && found_bounds != (None, None) {
                            // A declared range with open boundary modes
                            // adopts the modes of the first concrete range
                            // bound against it.
                            let previous = self.range_bounds.insert(id, found_bounds);
                            if previous != Some(found_bounds) {
                                *changed = true;
                            }
                        }
                        self.bind_at(slot, &range.element, &found.element, occ, changed)
                    }
                    _ => Err(BindError::ShapeMismatch {
                        declared: declared.clone(),
                        concrete: concrete.clone(),
                    }),
                }
            }
            FType::Context(ctx) => match concrete {
                FType::Context(found) => {
                    for (name, member) in &ctx.members {
                        match found.members.get(name) {
                            Some(value) => self.bind_at(slot, member, value, occ, changed)?,
                            None => *occ += count_holes(member),
                        }
                    }
                    Ok(())
                }
                _ => Err(BindError::ShapeMismatch {
                    declared: declared.clone(),
                    concrete: concrete.clone(),
                }),
            },
            // Declared function parameters are opaque during binding; their
            // variables are only filled in from other slots. The counter
            // still advances past the holes rendering will number inside.
            FType::Function(fun) => {
                *occ += count_holes(&fun.return_type);
                for param in &fun.params {
                    *occ += count_holes(&param.ty);
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn render(&self, slot: u32, declared: &FType, occ: &mut u32) -> FType {
        match declared {
            FType::Var(var) => self
                .vars
                .get(var)
                .cloned()
                .unwrap_or_else(|| FType::Var(*var)),
            FType::Any => {
                let id = (slot, *occ);
                *occ += 1;
                self.holes.get(&id).cloned().unwrap_or(FType::Any)
            }
            FType::List(list) => FType::list(self.render(slot, &list.element, occ)),
            FType::Range(range) => {
                let id = (slot, *occ);
                *occ += 1;
                let (start, end) = self
                    .range_bounds
                    .get(&id)
                    .copied()
                    .unwrap_or((range.start_inclusive, range.end_inclusive));
                FType::range_with(self.render(slot, &range.element, occ), start, end)
            }
            FType::Context(ctx) => FType::context(
                ctx.members
                    .iter()
                    .map(|(name, member)| (name.clone(), self.render(slot, member, occ))),
            ),
            FType::Function(fun) => {
                let return_type = self.render(slot, &fun.return_type, occ);
                let params = fun
                    .params
                    .iter()
                    .map(|param| Param {
                        name: param.name.clone(),
                        ty: self.render(slot, &param.ty, occ),
                    })
                    .collect();
                FType::Function(Arc::new(FunctionType {
                    return_type,
                    params,
                    variadic: fun.variadic,
                }))
            }
            other => other.clone(),
        }
    }
}

/// Number of hole identifiers [`TypeBinding::render`] consumes inside a
/// subtree: one per `any` occurrence and one per range node.
fn count_holes(ty: &FType) -> u32 {
    match ty {
        FType::Any => 1,
        FType::List(list) => count_holes(&list.element),
        FType::Range(range) => 1 + count_holes(&range.element),
        FType::Context(ctx) => ctx.members.values().map(count_holes).sum(),
        FType::Function(fun) => {
            count_holes(&fun.return_type)
                + fun.params.iter().map(|p| count_holes(&p.ty)).sum::<u32>()
        }
        _ => 0,
    }
}

#[cfg(test)]
#[path = "../tests/binding_tests.rs"]
mod tests;
