use strata_collections::{
    BinaryTree, BucketedHashMap, Deque, Direction, Error, Graph, GrowableArray, MinHeap, Path,
    Stack, Trie,
};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn zero_capacity_rejected_everywhere() {
    let expected = Error::InvalidArgument {
        reason: "capacity must be > 0",
    };
    assert_eq!(GrowableArray::with_capacity(0).unwrap_err(), expected);
    assert_eq!(Deque::with_capacity(0).unwrap_err(), expected);
    assert_eq!(Stack::with_capacity(0).unwrap_err(), expected);
    assert_eq!(MinHeap::with_capacity(0).unwrap_err(), expected);
    assert_eq!(BucketedHashMap::with_buckets(0).unwrap_err(), expected);
}

#[test]
fn defaults_start_at_sixteen() {
    assert_eq!(GrowableArray::default().capacity(), 16);
    assert_eq!(Deque::default().capacity(), 16);
    assert_eq!(Stack::default().capacity(), 16);
    assert_eq!(MinHeap::default().capacity(), 16);
    assert_eq!(BucketedHashMap::default().bucket_count(), 16);
}

// =============================================================================
// GrowableArray
// =============================================================================

#[test]
fn array_index_errors_carry_len() {
    let mut array = GrowableArray::with_capacity(4).unwrap();
    array.append(1).unwrap();
    array.append(2).unwrap();

    assert_eq!(
        array.get(2),
        Err(Error::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(
        array.set(5, 0),
        Err(Error::IndexOutOfRange { index: 5, len: 2 })
    );
    assert_eq!(
        array.insert(9, 2),
        Err(Error::IndexOutOfRange { index: 2, len: 2 })
    );

    array.insert(9, 0).unwrap();
    assert_eq!(array.as_slice(), &[9, 1, 2]);
}

#[test]
fn array_doubling_sequence() {
    let mut array = GrowableArray::with_capacity(10).unwrap();
    let mut seen = vec![array.capacity()];
    for v in 0..40 {
        array.append(v).unwrap();
        if *seen.last().unwrap() != array.capacity() {
            seen.push(array.capacity());
        }
    }
    assert_eq!(seen, vec![10, 20, 40, 80]);
}

// =============================================================================
// Deque
// =============================================================================

#[test]
fn deque_first_pushes_straddle_midpoint() {
    let mut deque = Deque::with_capacity(10).unwrap();
    deque.push_front(1).unwrap();
    deque.push_back(2).unwrap();

    assert_eq!(deque.len(), 2);
    assert_eq!(deque.front_index(), 5);
    assert_eq!(deque.back_index(), 6);
    assert_eq!(deque.as_slice(), &[1, 2]);
}

#[test]
fn deque_pop_empty() {
    let mut deque = Deque::with_capacity(3).unwrap();
    assert_eq!(deque.pop_front(), None);
    assert_eq!(deque.pop_back(), None);
    assert_eq!(deque.front(), None);
}

// =============================================================================
// MinHeap
// =============================================================================

#[test]
fn heap_sample_sequence() {
    let mut heap = MinHeap::with_capacity(10).unwrap();
    for v in [5, 3, 8, 1, 9, 2] {
        heap.insert(v).unwrap();
    }
    assert_eq!(heap.peek(), Some(1));

    let drained: Vec<i32> = std::iter::from_fn(|| heap.pop()).collect();
    assert_eq!(drained, vec![1, 2, 3, 5, 8, 9]);
    assert!(heap.is_empty());
}

// =============================================================================
// BucketedHashMap
// =============================================================================

#[test]
fn hmap_overwrite_then_delete() {
    let mut map = BucketedHashMap::with_buckets(4).unwrap();
    map.insert(1, "one").unwrap();
    map.insert(1, "uno").unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(1), Some("uno"));

    assert_eq!(map.delete(1).as_deref(), Some("uno"));
    assert_eq!(map.delete(1), None);
    assert_eq!(map.get(1), None);
}

#[test]
fn hmap_many_keys_survive_rehash() {
    let mut map = BucketedHashMap::with_buckets(1).unwrap();
    for k in -500..500 {
        map.insert(k, k.to_string()).unwrap();
    }
    assert!(map.bucket_count() > 1000);
    for k in -500..500 {
        assert_eq!(map.get(k), Some(k.to_string().as_str()));
    }
}

// =============================================================================
// BinaryTree
// =============================================================================

#[test]
fn tree_paths_address_nodes() {
    let mut tree = BinaryTree::new();
    for v in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(v).unwrap();
    }

    assert_eq!(tree.get_at_path(""), Ok(50));
    assert_eq!(tree.get_at_path("LR"), Ok(40));
    assert_eq!(tree.get_at_path("RL"), Ok(60));
    assert_eq!(tree.get_at_path("LLL"), Err(Error::InvalidPath));
    assert_eq!(tree.get_at_path("LX"), Err(Error::InvalidCharacter('X')));

    let path: Path = "RR".parse().unwrap();
    assert_eq!(path.steps(), &[Direction::Right, Direction::Right]);
    assert_eq!(tree.node_at(&path).map(|n| n.value()), Ok(80));
}

#[test]
fn tree_traversal_orders() {
    let mut tree = BinaryTree::new();
    for v in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(v).unwrap();
    }
    assert_eq!(tree.preorder_values(), vec![50, 30, 20, 40, 70, 60, 80]);
    assert_eq!(tree.inorder_values(), vec![20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(tree.postorder_values(), vec![20, 40, 30, 60, 80, 70, 50]);
    assert_eq!(tree.count_nodes(), 7);
    assert_eq!(tree.height(), 3);
}

#[test]
fn bst_duplicate_and_delete_root() {
    let mut tree = BinaryTree::new();
    for v in [50, 30, 70] {
        tree.insert(v).unwrap();
    }
    assert_eq!(tree.insert(30), Err(Error::Duplicate(30)));

    assert!(tree.delete(50));
    assert!(!tree.delete(50));
    assert_eq!(tree.inorder_values(), vec![30, 70]);
    assert_eq!(tree.root().map(|n| n.value()), Some(30));
}

// =============================================================================
// Trie
// =============================================================================

#[test]
fn trie_prefix_words() {
    let mut trie = Trie::new().unwrap();
    for w in ["car", "cart", "care", "cat"] {
        trie.insert(w).unwrap();
    }
    assert!(trie.search("car"));
    assert!(!trie.search("ca"));

    trie.delete("car").unwrap();
    assert!(!trie.search("car"));
    assert!(trie.search("cart"));
    assert!(trie.search("care"));
    assert_eq!(trie.delete("car"), Err(Error::NotFound));
    assert_eq!(trie.insert("Car"), Err(Error::InvalidCharacter('C')));
    assert!(!trie.search("c4r"));
}

// =============================================================================
// Graph
// =============================================================================

#[test]
fn graph_traversals_on_sample() {
    let mut graph = Graph::new().unwrap();
    let n: Vec<_> = (0..6).map(|v| graph.add_node(v).unwrap()).collect();
    for (a, b) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5)] {
        graph.add_edge(n[a], n[b]).unwrap();
    }

    assert_eq!(graph.dfs_values(), vec![0, 1, 3, 4, 2, 5]);
    assert_eq!(graph.bfs_values(), vec![0, 1, 2, 3, 4, 5]);

    graph.remove_node(n[1]).unwrap();
    assert!(!graph.has_edge(n[0], n[1]));
    assert!(graph.has_edge(n[0], n[2]));
    assert_eq!(graph.neighbors(n[3]), Some(&[][..]));
    assert_eq!(graph.add_edge(n[0], n[1]), Err(Error::NotFound));
    assert_eq!(graph.value(n[1]), None);
}
