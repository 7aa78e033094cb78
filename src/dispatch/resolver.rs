//! Per-class handler resolution and caching
//!
//! Resolving a class walks its graph: the handler registered directly on
//! the class, then everything its superclass resolves to, then everything
//! each implemented interface resolves to, in declaration order. The result
//! is cached per class and direction for the life of the resolver.
//!
//! A capability reachable along two paths (a written book reaches the
//! writable-book capability through its superclass and through the book
//! interface) is composed once, at its first position.

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;

use super::table::{CapabilityLookup, CapabilityTable, Direction, Handler};
use crate::codec::{ReadContext, WriteContext};
use crate::config::ConfigNode;
use crate::error::CodecError;
use crate::item::ItemStack;
use crate::meta::{ClassKey, ItemMeta, MetaClass};

/// The ordered handlers that apply to one class in one direction
#[derive(Debug)]
pub struct ComposedHandler {
    class: &'static MetaClass,
    handlers: Vec<Handler>,
}

impl ComposedHandler {
    pub fn class(&self) -> &'static MetaClass {
        self.class
    }

    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    /// Runs every writer in order against the same extension data
    pub fn write(
        &self,
        ctx: &WriteContext<'_>,
        item: &ItemStack,
        meta: &dyn ItemMeta,
        node: &mut ConfigNode,
    ) {
        for handler in &self.handlers {
            if let Some(write) = handler.write {
                write(ctx, item, meta, node);
            }
        }
    }

    /// Runs every reader in order, stopping at the first failure
    pub fn read(
        &self,
        ctx: &ReadContext<'_>,
        node: &ConfigNode,
        meta: &mut dyn ItemMeta,
    ) -> Result<(), CodecError> {
        for handler in &self.handlers {
            if let Some(read) = handler.read {
                read(ctx, node, meta)?;
            }
        }
        Ok(())
    }
}

/// A cached resolution result
#[derive(Debug, Clone)]
pub enum Resolution {
    /// No handler applies to the class
    Nothing,
    Composed(Arc<ComposedHandler>),
}

impl Resolution {
    pub fn handlers(&self) -> &[Handler] {
        match self {
            Resolution::Nothing => &[],
            Resolution::Composed(composed) => composed.handlers(),
        }
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Resolution::Nothing)
    }

    pub fn write(
        &self,
        ctx: &WriteContext<'_>,
        item: &ItemStack,
        meta: &dyn ItemMeta,
        node: &mut ConfigNode,
    ) {
        if let Resolution::Composed(composed) = self {
            composed.write(ctx, item, meta, node);
        }
    }

    pub fn read(
        &self,
        ctx: &ReadContext<'_>,
        node: &ConfigNode,
        meta: &mut dyn ItemMeta,
    ) -> Result<(), CodecError> {
        match self {
            Resolution::Nothing => Ok(()),
            Resolution::Composed(composed) => composed.read(ctx, node, meta),
        }
    }
}

/// Resolves and memoizes the handlers applying to each class
///
/// Safe to share between threads. Two threads racing on the first use of a
/// class may both compute its resolution; the first one stored is kept and
/// returned to everyone afterwards.
pub struct HandlerResolver<L = CapabilityTable> {
    table: L,
    write_cache: DashMap<ClassKey, Resolution>,
    read_cache: DashMap<ClassKey, Resolution>,
}

static GLOBAL: Lazy<HandlerResolver> =
    Lazy::new(|| HandlerResolver::new(CapabilityTable::standard()));

impl HandlerResolver {
    /// The process-wide resolver over the standard capability table
    pub fn global() -> &'static HandlerResolver {
        &GLOBAL
    }
}

impl<L: CapabilityLookup> HandlerResolver<L> {
    pub fn new(table: L) -> Self {
        HandlerResolver {
            table,
            write_cache: DashMap::new(),
            read_cache: DashMap::new(),
        }
    }

    pub fn table(&self) -> &L {
        &self.table
    }

    pub fn resolve_write(&self, class: &'static MetaClass) -> Resolution {
        self.resolve(class, Direction::Write)
    }

    pub fn resolve_read(&self, class: &'static MetaClass) -> Resolution {
        self.resolve(class, Direction::Read)
    }

    /// Returns the composed handler for `class`, computing it on first use
    pub fn resolve(&self, class: &'static MetaClass, direction: Direction) -> Resolution {
        let cache = self.cache(direction);
        let key = class.key();

        // The guard must be released before recursing into the same map
        if let Some(hit) = cache.get(&key) {
            return hit.value().clone();
        }

        let mut collected: Vec<Handler> = Vec::new();

        if let Some(direct) = self.table.lookup(class) {
            if direct.handles(direction) {
                collected.push(direct);
            }
        }

        if let Some(superclass) = class.superclass {
            extend_unique(&mut collected, self.resolve(superclass, direction).handlers());
        }

        for interface in class.interfaces {
            extend_unique(&mut collected, self.resolve(interface, direction).handlers());
        }

        let resolution = if collected.is_empty() {
            Resolution::Nothing
        } else {
            Resolution::Composed(Arc::new(ComposedHandler {
                class,
                handlers: collected,
            }))
        };

        log::debug!(
            "Resolved {:?} handlers for {}: {:?}",
            direction,
            class.name,
            resolution
                .handlers()
                .iter()
                .map(|h| h.capability.name)
                .collect::<Vec<_>>()
        );

        cache.entry(key).or_insert(resolution).value().clone()
    }

    /// Number of classes resolved so far in one direction
    pub fn cached(&self, direction: Direction) -> usize {
        self.cache(direction).len()
    }

    fn cache(&self, direction: Direction) -> &DashMap<ClassKey, Resolution> {
        match direction {
            Direction::Write => &self.write_cache,
            Direction::Read => &self.read_cache,
        }
    }
}

fn extend_unique(collected: &mut Vec<Handler>, handlers: &[Handler]) {
    for handler in handlers {
        if !collected.iter().any(|h| h.same_capability(handler)) {
            collected.push(*handler);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::classes::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Wraps the standard table and counts every lookup
    struct CountingTable {
        inner: CapabilityTable,
        lookups: AtomicUsize,
        seen: Mutex<Vec<&'static str>>,
    }

    impl CountingTable {
        fn standard() -> Self {
            CountingTable {
                inner: CapabilityTable::standard(),
                lookups: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    impl CapabilityLookup for CountingTable {
        fn lookup(&self, class: &'static MetaClass) -> Option<Handler> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(class.name);
            self.inner.lookup(class)
        }
    }

    fn capability_names(resolution: &Resolution) -> Vec<&'static str> {
        resolution
            .handlers()
            .iter()
            .map(|h| h.capability.name)
            .collect()
    }

    #[test]
    fn test_class_without_capabilities_is_negatively_cached() {
        let resolver = HandlerResolver::new(CountingTable::standard());

        let first = resolver.resolve_write(&META_ITEM);
        assert!(first.is_nothing());
        let after_first = resolver.table().lookups();
        assert!(after_first > 0);

        let second = resolver.resolve_write(&META_ITEM);
        assert!(second.is_nothing());
        assert_eq!(resolver.table().lookups(), after_first);
    }

    #[test]
    fn test_composed_handler_is_referentially_stable() {
        let resolver = HandlerResolver::new(CapabilityTable::standard());

        let (Resolution::Composed(a), Resolution::Composed(b)) = (
            resolver.resolve_read(&META_POTION),
            resolver.resolve_read(&META_POTION),
        ) else {
            panic!("potion meta should resolve to a composed handler");
        };
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(capability_names(&Resolution::Composed(a)), vec!["PotionMeta"]);
    }

    #[test]
    fn test_directions_are_cached_separately() {
        let resolver = HandlerResolver::new(CountingTable::standard());

        resolver.resolve_write(&META_BANNER);
        let after_write = resolver.table().lookups();
        resolver.resolve_read(&META_BANNER);

        assert!(resolver.table().lookups() > after_write);
        assert!(resolver.cached(Direction::Write) > 0);
        assert_eq!(resolver.cached(Direction::Write), resolver.cached(Direction::Read));
    }

    #[test]
    fn test_diamond_capability_is_composed_once() {
        let resolver = HandlerResolver::new(CapabilityTable::standard());

        let book = resolver.resolve_write(&META_BOOK_SIGNED);
        assert_eq!(capability_names(&book), vec!["WritableBookMeta", "BookMeta"]);

        let armor = resolver.resolve_write(&META_COLORABLE_ARMOR);
        assert_eq!(capability_names(&armor), vec!["ArmorMeta", "LeatherArmorMeta"]);
    }

    #[test]
    fn test_ancestors_are_cached_on_the_way() {
        let resolver = HandlerResolver::new(CountingTable::standard());
        resolver.resolve_write(&META_BOOK_SIGNED);
        let after_signed = resolver.table().lookups();

        // MetaBook was resolved as the superclass; no new walk needed
        let plain = resolver.resolve_write(&META_BOOK);
        assert_eq!(resolver.table().lookups(), after_signed);
        assert_eq!(capability_names(&plain), vec!["WritableBookMeta"]);

        let seen = resolver.table().seen.lock().unwrap();
        assert_eq!(seen.iter().filter(|name| **name == "WritableBookMeta").count(), 1);
    }

    #[test]
    fn test_direction_specific_handlers() {
        fn noop_write(
            _: &WriteContext<'_>,
            _: &ItemStack,
            _: &dyn ItemMeta,
            _: &mut ConfigNode,
        ) {
        }

        let table = CapabilityTable::from_handlers([Handler {
            capability: &SKULL_META,
            write: Some(noop_write),
            read: None,
        }]);
        let resolver = HandlerResolver::new(table);

        assert_eq!(resolver.resolve_write(&META_SKULL).handlers().len(), 1);
        assert!(resolver.resolve_read(&META_SKULL).is_nothing());
    }

    #[test]
    fn test_concurrent_first_use() {
        let resolver = HandlerResolver::new(CapabilityTable::standard());

        let results: Vec<Resolution> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| resolver.resolve_write(&META_COLORABLE_ARMOR)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let Resolution::Composed(stored) = resolver.resolve_write(&META_COLORABLE_ARMOR) else {
            panic!("colorable armor should resolve to a composed handler");
        };
        for result in results {
            assert_eq!(capability_names(&result), vec!["ArmorMeta", "LeatherArmorMeta"]);
        }
        // Whoever raced, later calls all see the stored instance
        let Resolution::Composed(again) = resolver.resolve_write(&META_COLORABLE_ARMOR) else {
            unreachable!();
        };
        assert!(Arc::ptr_eq(&stored, &again));
    }
}
