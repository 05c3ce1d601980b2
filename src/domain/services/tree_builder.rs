//! Tree Builder
//!
//! Converts a flat list of collection records into a sorted forest.
//!
//! A record is attached under its parent when the parent key resolves inside
//! the same record set; otherwise it becomes a root. That single rule covers
//! both true roots and orphans whose parent is missing.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::entities::{CollectionNode, CollectionRecord};

/// Build a forest from flat records.
///
/// With unique keys the forest does not depend on input order: siblings
/// follow [`sibling_order`] and cycles are broken by the same ordering.
/// A repeated key keeps the last record seen.
pub fn build_tree<I>(records: I) -> Vec<CollectionNode>
where
    I: IntoIterator<Item = CollectionRecord>,
{
    // key -> slot. A repeated key replaces the earlier record in place.
    let mut slots: Vec<CollectionRecord> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();
    for record in records {
        match by_key.get(&record.key) {
            Some(&slot) => slots[slot] = record,
            None => {
                by_key.insert(record.key.clone(), slots.len());
                slots.push(record);
            }
        }
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); slots.len()];
    let mut parent_of: Vec<Option<usize>> = vec![None; slots.len()];
    let mut roots: Vec<usize> = Vec::new();

    for (slot, record) in slots.iter().enumerate() {
        match record.parent().and_then(|p| by_key.get(p)) {
            Some(&parent) => {
                children[parent].push(slot);
                parent_of[slot] = Some(parent);
            }
            None => roots.push(slot),
        }
    }

    promote_cycles(&slots, &mut roots, &mut children, &mut parent_of);

    materialize(&roots, &slots, &children)
}

/// Ordering used for every sibling list: case-insensitive name, then exact
/// name, then key.
pub fn sibling_order(a: &CollectionNode, b: &CollectionNode) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.key.cmp(&b.key))
}

/// Records on a parent cycle (and everything hanging below one) are
/// unreachable from any root. For each cycle, the member that sorts first
/// (as a sibling would) is promoted to a root, which reconnects the rest of
/// the cycle and its descendants under their own parents.
fn promote_cycles(
    slots: &[CollectionRecord],
    roots: &mut Vec<usize>,
    children: &mut [Vec<usize>],
    parent_of: &mut [Option<usize>],
) {
    let mut reachable = vec![false; children.len()];
    mark_reachable(roots, children, &mut reachable);
    if reachable.iter().all(|&r| r) {
        return;
    }

    let mut members = cycle_members(&reachable, parent_of);
    members.sort_by(|&a, &b| record_order(&slots[a], &slots[b]));

    for slot in members {
        if reachable[slot] {
            continue;
        }
        if let Some(parent) = parent_of[slot].take() {
            children[parent].retain(|&c| c != slot);
        }
        tracing::debug!(key = %slots[slot].key, "promoting collection caught in a parent cycle to root");
        roots.push(slot);
        mark_reachable(&[slot], children, &mut reachable);
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    New,
    OnPath,
    Done,
}

/// Unreachable slots whose parent chain leads back to themselves.
///
/// Every unreachable slot has a parent that is also unreachable, so each
/// walk up the chain ends either on the current path (a new cycle) or on a
/// slot an earlier walk already settled.
fn cycle_members(reachable: &[bool], parent_of: &[Option<usize>]) -> Vec<usize> {
    let mut visit = vec![Visit::New; parent_of.len()];
    let mut members = Vec::new();

    for start in 0..parent_of.len() {
        if reachable[start] || visit[start] != Visit::New {
            continue;
        }

        let mut path = Vec::new();
        let mut current = Some(start);
        while let Some(slot) = current {
            match visit[slot] {
                Visit::New => {
                    visit[slot] = Visit::OnPath;
                    path.push(slot);
                    current = parent_of[slot];
                }
                Visit::OnPath => {
                    if let Some(at) = path.iter().position(|&s| s == slot) {
                        members.extend_from_slice(&path[at..]);
                    }
                    break;
                }
                Visit::Done => break,
            }
        }
        for slot in path {
            visit[slot] = Visit::Done;
        }
    }
    members
}

fn record_order(a: &CollectionRecord, b: &CollectionRecord) -> Ordering {
    let (an, bn) = (a.display_name(), b.display_name());
    an.to_lowercase()
        .cmp(&bn.to_lowercase())
        .then_with(|| an.cmp(bn))
        .then_with(|| a.key.cmp(&b.key))
}

fn mark_reachable(start: &[usize], children: &[Vec<usize>], reachable: &mut [bool]) {
    let mut stack: Vec<usize> = start.to_vec();
    while let Some(slot) = stack.pop() {
        if reachable[slot] {
            continue;
        }
        reachable[slot] = true;
        stack.extend(children[slot].iter().copied());
    }
}

/// Turn the slot graph into owned nodes without recursing per level.
fn materialize(
    roots: &[usize],
    slots: &[CollectionRecord],
    children: &[Vec<usize>],
) -> Vec<CollectionNode> {
    // Pre-order; walked backwards, every child is built before its parent.
    let mut order = Vec::with_capacity(slots.len());
    let mut stack: Vec<usize> = roots.to_vec();
    while let Some(slot) = stack.pop() {
        order.push(slot);
        stack.extend(children[slot].iter().copied());
    }

    let mut built: Vec<Option<CollectionNode>> = (0..slots.len()).map(|_| None).collect();
    for &slot in order.iter().rev() {
        let mut kids: Vec<CollectionNode> = children[slot]
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        kids.sort_by(sibling_order);

        let record = &slots[slot];
        built[slot] = Some(CollectionNode {
            key: record.key.clone(),
            name: record.display_name().to_string(),
            parent_key: record.parent().map(str::to_string),
            children: kids,
        });
    }

    let mut forest: Vec<CollectionNode> = roots
        .iter()
        .filter_map(|&slot| built[slot].take())
        .collect();
    forest.sort_by(sibling_order);
    forest
}
