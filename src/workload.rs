use serde::{Deserialize, Serialize};

/// Rendering quality requested from the inference endpoint.
///
/// Serialized lowercase, matching the endpoint's expected payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderParams {
    pub quality: Quality,
}

/// One unit of load: the JSON body posted to the target endpoint.
///
/// Immutable once created. Ownership moves through the work queue to the
/// worker that sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub image_id: u64,
    pub params: RenderParams,
}

impl WorkItem {
    pub fn new(image_id: u64) -> Self {
        Self {
            image_id,
            params: RenderParams {
                quality: Quality::Low,
            },
        }
    }
}

/// Finite, ordered, deterministic sequence of [`WorkItem`]s for one run.
///
/// Index `i` always yields the same logical item, so runs against a
/// deterministic endpoint are repeatable. Lazy: items are built as they are
/// pulled, never buffered up front.
#[derive(Debug, Clone)]
pub struct Workload {
    next: u64,
    total: u64,
}

impl Workload {
    pub fn new(total: u64) -> Self {
        Self { next: 0, total }
    }
}

impl Iterator for Workload {
    type Item = WorkItem;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let item = WorkItem::new(self.next);
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Workload {}
