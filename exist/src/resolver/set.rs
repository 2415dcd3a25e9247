//! In-place assignment along a path.

use crate::config::IntermediateStyle;
use crate::path::Path;
use crate::value::{Value, MAX_ARRAY_GAP};

/// Assigns `value` at `path` inside `root`.
///
/// `create` is `None` when missing intermediates must fail the assignment,
/// or the style of container to build for them.
///
/// Failure never leaves a partial mutation: when creation is allowed the
/// whole path is checked with [`fits`] before anything is touched.
pub(crate) fn assign(
    root: &mut Value,
    path: &Path,
    value: Value,
    create: Option<IntermediateStyle>,
) -> bool {
    let Some((last, parents)) = path.split_last() else {
        log::debug!("set rejected: empty path");
        return false;
    };

    if let Some(style) = create {
        if !fits(root, path, style) {
            log::debug!("set '{path}' rejected: path cannot be built");
            return false;
        }
    }

    let mut node = root;
    for (depth, key) in parents.iter().enumerate() {
        let next = parents.get(depth + 1).map_or(last, String::as_str);
        node = match descend(node, key, next, create) {
            Some(child) => child,
            None => {
                log::debug!("set '{path}' failed at key '{key}' (depth {depth})");
                return false;
            }
        };
    }

    let assigned = node.assign(last, value);
    if !assigned {
        log::debug!("set '{path}' could not assign key '{last}' on {} node", node.kind());
    }
    assigned
}

/// Moves from `node` to its `key` member, creating it when allowed.
///
/// `next` is the key that will be looked up in the child, used to pick the
/// shape of a freshly created container.
fn descend<'a>(
    node: &'a mut Value,
    key: &str,
    next: &str,
    create: Option<IntermediateStyle>,
) -> Option<&'a mut Value> {
    let Some(style) = create else {
        return node.member_mut(key);
    };

    let slot = node.slot_mut(key)?;
    if slot.is_null() {
        *slot = container_for(next, style);
    }
    Some(slot)
}

/// A node along a planned assignment.
#[derive(Clone, Copy)]
enum Planned<'a> {
    Existing(&'a Value),
    FreshArray,
    FreshMap,
}

impl Planned<'_> {
    fn accepts(self, key: &str) -> bool {
        match self {
            Self::Existing(Value::Map(_)) | Self::FreshMap => true,
            Self::Existing(Value::Array(items)) => Path::as_index(key)
                .is_some_and(|index| index.saturating_sub(items.len()) <= MAX_ARRAY_GAP),
            Self::FreshArray => Path::as_index(key).is_some_and(|index| index <= MAX_ARRAY_GAP),
            Self::Existing(_) => false,
        }
    }

    fn fresh(next: &str, style: IntermediateStyle) -> Self {
        match style {
            IntermediateStyle::ByKey if Path::is_index(next) => Self::FreshArray,
            IntermediateStyle::ByKey | IntermediateStyle::Map => Self::FreshMap,
        }
    }
}

/// Replays an assignment with creation against `root` without mutating it.
fn fits(root: &Value, path: &Path, style: IntermediateStyle) -> bool {
    let keys = path.keys();
    let mut node = Planned::Existing(root);
    for (depth, key) in keys.iter().enumerate() {
        if !node.accepts(key) {
            return false;
        }
        let Some(next) = keys.get(depth + 1) else {
            return true;
        };
        node = match node {
            Planned::Existing(value) => match value.member(key) {
                Some(child) if !child.is_null() => Planned::Existing(child),
                _ => Planned::fresh(next, style),
            },
            Planned::FreshArray | Planned::FreshMap => Planned::fresh(next, style),
        };
    }
    false
}

fn container_for(next: &str, style: IntermediateStyle) -> Value {
    match style {
        IntermediateStyle::ByKey if Path::is_index(next) => Value::array(),
        IntermediateStyle::ByKey | IntermediateStyle::Map => Value::map(),
    }
}
