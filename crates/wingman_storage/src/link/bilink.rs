//! Bidirectional registry of named relations between two item kinds.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use wingman_foundation::{Error, Item, ItemId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::edge::LinkEdge;
use super::param::LinkParam;
use crate::store::ReadOnlyItemStore;

/// Owner id → relation name → edge.
type Links = HashMap<ItemId, HashMap<String, LinkEdge>>;

/// One declared side of a relation and the name of its other side.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Declaration {
    param: LinkParam,
    reverse: String,
}

/// Keeps both directions of every relation declared between sources `S`
/// and targets `T`.
///
/// Each relation has a name on the source side and a name on the target
/// side, with independent capacities. Every registered owner holds one edge
/// per relation declared on its side. Membership is mirrored on write, and
/// checked again on read: reading one direction with
/// [`linked_targets`](Self::linked_targets) or
/// [`linked_sources`](Self::linked_sources) puts the owner back into any
/// reverse edge that lost it, and prunes ids that no longer resolve or whose
/// reverse edge is full or missing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct BiLinkManager<S, T> {
    source_schema: HashMap<String, Declaration>,
    target_schema: HashMap<String, Declaration>,
    source_links: Links,
    target_links: Links,
    #[cfg_attr(feature = "serde", serde(skip))]
    _types: PhantomData<fn() -> (S, T)>,
}

impl<S: Item, T: Item> BiLinkManager<S, T> {
    /// Creates a registry with no relations and no owners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source_schema: HashMap::new(),
            target_schema: HashMap::new(),
            source_links: HashMap::new(),
            target_links: HashMap::new(),
            _types: PhantomData,
        }
    }

    /// Declares a relation.
    ///
    /// `source` names the edge held by each source owner and its capacity;
    /// `target` does the same for target owners. Redeclaring a name replaces
    /// its edges with empty ones for every registered owner. If the name was
    /// paired with a different reverse name, that reverse declaration is
    /// dropped along with its edges.
    pub fn create_link(&mut self, source: LinkParam, target: LinkParam) {
        if let Some(old) = self.source_schema.get(&source.name) {
            if old.reverse != target.name {
                let orphan = old.reverse.clone();
                drop_declaration(&mut self.target_schema, &mut self.target_links, &orphan);
            }
        }
        if let Some(old) = self.target_schema.get(&target.name) {
            if old.reverse != source.name {
                let orphan = old.reverse.clone();
                drop_declaration(&mut self.source_schema, &mut self.source_links, &orphan);
            }
        }

        for edges in self.source_links.values_mut() {
            edges.insert(source.name.clone(), source.edge());
        }
        for edges in self.target_links.values_mut() {
            edges.insert(target.name.clone(), target.edge());
        }

        tracing::debug!(
            target: "wingman::link",
            source_name = %source.name,
            target_name = %target.name,
            "Declared relation"
        );

        self.source_schema.insert(
            source.name.clone(),
            Declaration {
                param: source.clone(),
                reverse: target.name.clone(),
            },
        );
        self.target_schema.insert(
            target.name.clone(),
            Declaration {
                param: target,
                reverse: source.name,
            },
        );
    }

    /// Declares a relation with the same name and capacity on both sides.
    pub fn create_symmetric_link(&mut self, param: LinkParam) {
        self.create_link(param.clone(), param);
    }

    /// Registers a source owner, creating an empty edge for every relation
    /// declared on the source side. Edges that already exist are kept.
    pub fn register_source(&mut self, id: ItemId) {
        register(&self.source_schema, &mut self.source_links, id);
    }

    /// Registers a target owner. See [`register_source`](Self::register_source).
    pub fn register_target(&mut self, id: ItemId) {
        register(&self.target_schema, &mut self.target_links, id);
    }

    /// Links a source to a target under a relation named from the source
    /// side.
    ///
    /// Both capacities are checked before either edge changes, so a failure
    /// leaves the registry untouched. Linking an already linked pair is a
    /// no-op that also restores a missing reverse entry.
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if the relation is not declared or either
    /// owner is not registered, and `LinkFull` if either edge is at capacity.
    pub fn link(&mut self, source: &ItemId, relation: &str, target: &ItemId) -> Result<()> {
        let reverse = reverse_name(&self.source_schema, relation)?;
        let forward = edge_mut(&mut self.source_links, source, relation)?;
        let backward = edge_mut(&mut self.target_links, target, &reverse)?;

        if forward.is_full() && !forward.contains(target) {
            return Err(Error::link_full(forward.capacity()));
        }
        if backward.is_full() && !backward.contains(source) {
            return Err(Error::link_full(backward.capacity()));
        }
        forward.put(target.clone())?;
        backward.put(source.clone())?;

        tracing::debug!(
            target: "wingman::link",
            from = %source,
            relation,
            to = %target,
            "Linked"
        );
        Ok(())
    }

    /// Unlinks a source from a target under a relation named from the
    /// source side. Missing owners or members are ignored.
    ///
    /// Returns true if either edge held the other id.
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if the relation is not declared.
    pub fn unlink(&mut self, source: &ItemId, relation: &str, target: &ItemId) -> Result<bool> {
        let reverse = reverse_name(&self.source_schema, relation)?;
        let removed_forward = self
            .source_links
            .get_mut(source)
            .and_then(|edges| edges.get_mut(relation))
            .is_some_and(|edge| edge.remove(target));
        let removed_backward = self
            .target_links
            .get_mut(target)
            .and_then(|edges| edges.get_mut(&reverse))
            .is_some_and(|edge| edge.remove(source));

        if removed_forward || removed_backward {
            tracing::debug!(
                target: "wingman::link",
                from = %source,
                relation,
                to = %target,
                "Unlinked"
            );
        }
        Ok(removed_forward || removed_backward)
    }

    /// Returns true if any edge of either id, in either direction, holds the
    /// other id.
    #[must_use]
    pub fn has_link(&self, a: &ItemId, b: &ItemId) -> bool {
        holds(&self.source_links, a, b)
            || holds(&self.source_links, b, a)
            || holds(&self.target_links, a, b)
            || holds(&self.target_links, b, a)
    }

    /// Returns true if the pair is linked under a relation named from the
    /// source side, in either direction's edge.
    #[must_use]
    pub fn is_linked(&self, source: &ItemId, relation: &str, target: &ItemId) -> bool {
        let forward = self
            .source_edge(source, relation)
            .is_some_and(|edge| edge.contains(target));
        let backward = self
            .source_schema
            .get(relation)
            .and_then(|decl| self.target_edge(target, &decl.reverse))
            .is_some_and(|edge| edge.contains(source));
        forward || backward
    }

    /// Resolves the targets linked to a source under a relation named from
    /// the source side, repairing reverse edges and pruning invalid ids.
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if the relation is not declared or the source
    /// is not registered.
    pub fn linked_targets<'s, St>(
        &mut self,
        source: &ItemId,
        relation: &str,
        store: &'s St,
    ) -> Result<Vec<&'s T>>
    where
        St: ReadOnlyItemStore<T> + ?Sized,
    {
        let reverse = reverse_name(&self.source_schema, relation)?;
        linked_items(
            source,
            relation,
            &reverse,
            store,
            &mut self.source_links,
            &mut self.target_links,
        )
    }

    /// Resolves the sources linked to a target under a relation named from
    /// the target side. See [`linked_targets`](Self::linked_targets).
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if the relation is not declared or the target
    /// is not registered.
    pub fn linked_sources<'s, St>(
        &mut self,
        target: &ItemId,
        relation: &str,
        store: &'s St,
    ) -> Result<Vec<&'s S>>
    where
        St: ReadOnlyItemStore<S> + ?Sized,
    {
        let reverse = reverse_name(&self.target_schema, relation)?;
        linked_items(
            target,
            relation,
            &reverse,
            store,
            &mut self.target_links,
            &mut self.source_links,
        )
    }

    /// Returns a source owner's edge for a relation.
    #[must_use]
    pub fn source_edge(&self, source: &ItemId, relation: &str) -> Option<&LinkEdge> {
        self.source_links.get(source)?.get(relation)
    }

    /// Returns a target owner's edge for a relation.
    #[must_use]
    pub fn target_edge(&self, target: &ItemId, relation: &str) -> Option<&LinkEdge> {
        self.target_links.get(target)?.get(relation)
    }

    /// Returns the declared parameters of a source-side relation.
    #[must_use]
    pub fn source_param(&self, relation: &str) -> Option<&LinkParam> {
        self.source_schema.get(relation).map(|decl| &decl.param)
    }

    /// Returns the declared parameters of a target-side relation.
    #[must_use]
    pub fn target_param(&self, relation: &str) -> Option<&LinkParam> {
        self.target_schema.get(relation).map(|decl| &decl.param)
    }
}

impl<S: Item, T: Item> Default for BiLinkManager<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T> Clone for BiLinkManager<S, T> {
    fn clone(&self) -> Self {
        Self {
            source_schema: self.source_schema.clone(),
            target_schema: self.target_schema.clone(),
            source_links: self.source_links.clone(),
            target_links: self.target_links.clone(),
            _types: PhantomData,
        }
    }
}

impl<S, T> fmt::Debug for BiLinkManager<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiLinkManager")
            .field("source_relations", &self.source_schema.len())
            .field("target_relations", &self.target_schema.len())
            .field("sources", &self.source_links.len())
            .field("targets", &self.target_links.len())
            .finish()
    }
}

fn register(schema: &HashMap<String, Declaration>, links: &mut Links, id: ItemId) {
    let edges = links.entry(id).or_default();
    for (name, decl) in schema {
        edges
            .entry(name.clone())
            .or_insert_with(|| decl.param.edge());
    }
}

fn drop_declaration(schema: &mut HashMap<String, Declaration>, links: &mut Links, name: &str) {
    schema.remove(name);
    for edges in links.values_mut() {
        edges.remove(name);
    }
}

fn reverse_name(schema: &HashMap<String, Declaration>, relation: &str) -> Result<String> {
    match schema.get(relation) {
        Some(decl) => Ok(decl.reverse.clone()),
        None => {
            tracing::error!(target: "wingman::link", relation, "Relation is not declared");
            Err(Error::link_not_found(format!("relation {relation} is not declared")))
        }
    }
}

fn edge_mut<'l>(links: &'l mut Links, owner: &ItemId, relation: &str) -> Result<&'l mut LinkEdge> {
    match links.get_mut(owner).and_then(|edges| edges.get_mut(relation)) {
        Some(edge) => Ok(edge),
        None => {
            tracing::error!(
                target: "wingman::link",
                owner = %owner,
                relation,
                "Owner has no edge for relation"
            );
            Err(Error::link_not_found(format!(
                "{owner} is not registered under {relation}"
            )))
        }
    }
}

fn holds(links: &Links, owner: &ItemId, member: &ItemId) -> bool {
    links
        .get(owner)
        .is_some_and(|edges| edges.values().any(|edge| edge.contains(member)))
}

/// Reads one owner's edge, repairing the reverse side and pruning ids that
/// cannot be kept.
///
/// An id is invalid when its item is missing from `store`, when the target
/// has no `other_name` edge, or when that edge is full without the owner.
fn linked_items<'s, U, St>(
    owner: &ItemId,
    this_name: &str,
    other_name: &str,
    store: &'s St,
    this_links: &mut Links,
    other_links: &mut Links,
) -> Result<Vec<&'s U>>
where
    U: Item,
    St: ReadOnlyItemStore<U> + ?Sized,
{
    let edge = edge_mut(this_links, owner, this_name)?;

    let mut resolved = Vec::with_capacity(edge.len());
    let mut invalid = Vec::new();
    for id in edge.ids() {
        let Some(item) = store.lookup(id) else {
            invalid.push(id.clone());
            continue;
        };
        let Some(reverse) = other_links.get_mut(id).and_then(|edges| edges.get_mut(other_name))
        else {
            invalid.push(id.clone());
            continue;
        };
        let repairing = !reverse.contains(owner);
        if reverse.put(owner.clone()).is_err() {
            invalid.push(id.clone());
            continue;
        }
        if repairing {
            tracing::debug!(
                target: "wingman::link",
                owner = %owner,
                member = %id,
                relation = other_name,
                "Restored reverse link"
            );
        }
        resolved.push(item);
    }

    for id in &invalid {
        tracing::warn!(
            target: "wingman::link",
            owner = %owner,
            relation = this_name,
            removed = %id,
            "Removing invalid id from link"
        );
        edge.remove(id);
    }

    Ok(resolved)
}
