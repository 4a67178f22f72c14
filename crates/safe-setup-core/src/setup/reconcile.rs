use serde::Serialize;

use crate::persistence::PersistenceResult;

/// What a single get-or-create pass did to a keyed row.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReconcileOutcome {
    Created,
    Updated { fields: Vec<&'static str> },
    Unchanged,
}

impl ReconcileOutcome {
    pub fn created(&self) -> bool {
        matches!(self, Self::Created)
    }
}

type DriftCheck<'a, R> = Box<dyn Fn(&R) -> bool + 'a>;
type DriftFix<'a, R> = Box<dyn Fn(&R) -> PersistenceResult<()> + 'a>;

/// A field of an existing row that is rewritten when it no longer matches
/// the desired value.
pub struct Correction<'a, R> {
    field: &'static str,
    drifted: DriftCheck<'a, R>,
    apply: DriftFix<'a, R>,
}

impl<'a, R> Correction<'a, R> {
    pub fn new(
        field: &'static str,
        drifted: impl Fn(&R) -> bool + 'a,
        apply: impl Fn(&R) -> PersistenceResult<()> + 'a,
    ) -> Self {
        Self {
            field,
            drifted: Box::new(drifted),
            apply: Box::new(apply),
        }
    }
}

/// Looks a row up by its key and creates it when absent. When present, each
/// drifted correction is applied in order; fields without a correction are
/// never touched.
pub fn reconcile<R>(
    lookup: impl FnOnce() -> PersistenceResult<Option<R>>,
    create: impl FnOnce() -> PersistenceResult<()>,
    corrections: &[Correction<'_, R>],
) -> PersistenceResult<ReconcileOutcome> {
    let Some(existing) = lookup()? else {
        create()?;
        return Ok(ReconcileOutcome::Created);
    };

    let mut fields = Vec::new();
    for correction in corrections {
        if (correction.drifted)(&existing) {
            (correction.apply)(&existing)?;
            fields.push(correction.field);
        }
    }

    if fields.is_empty() {
        Ok(ReconcileOutcome::Unchanged)
    } else {
        Ok(ReconcileOutcome::Updated { fields })
    }
}
