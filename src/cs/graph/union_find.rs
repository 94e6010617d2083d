/// A vertex of the contraction graph together with its disjoint-set state.
///
/// `parent` is an index into the owning [`VertexRegistry`]; a root points at itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: u32,
    parent: usize,
    rank: u32,
}

impl Vertex {
    /// Label assigned by the loader.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn parent(&self) -> usize {
        self.parent
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }
}

/// Arena of vertices driving a union-find forest with path compression and union by rank.
///
/// Indices handed to [`find`](Self::find) and [`merge`](Self::merge) are arena positions,
/// not labels. Passing an index outside the arena panics.
#[derive(Debug, Clone, Default)]
pub struct VertexRegistry {
    vertices: Vec<Vertex>,
}

impl VertexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Appends a fresh singleton vertex and returns its index.
    pub fn push(&mut self, id: u32) -> usize {
        let index = self.vertices.len();
        self.vertices.push(Vertex {
            id,
            parent: index,
            rank: 0,
        });
        index
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    pub fn parent(&self, index: usize) -> usize {
        self.vertices[index].parent
    }

    pub fn rank(&self, index: usize) -> u32 {
        self.vertices[index].rank
    }

    pub fn is_root(&self, index: usize) -> bool {
        self.vertices[index].parent == index
    }

    /// Returns the representative of the set containing `index`.
    ///
    /// Every vertex on the walked path is re-pointed at the root. The walk is a loop, so
    /// chains as long as the arena never grow the stack.
    pub fn find(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.vertices[root].parent != root {
            root = self.vertices[root].parent;
        }

        let mut current = index;
        while current != root {
            let next = self.vertices[current].parent;
            self.vertices[current].parent = root;
            current = next;
        }
        root
    }

    /// Same as [`find`](Self::find) without compressing the path.
    pub fn find_root(&self, index: usize) -> usize {
        let mut root = index;
        while self.vertices[root].parent != root {
            root = self.vertices[root].parent;
        }
        root
    }

    /// Unions the sets containing `u` and `v`.
    ///
    /// The lower-rank root goes under the higher-rank one. On equal ranks `u`'s root is
    /// attached under `v`'s root, which gains one rank. Returns `false` and leaves
    /// everything untouched when both already share a root.
    pub fn merge(&mut self, u: usize, v: usize) -> bool {
        let u_root = self.find(u);
        let v_root = self.find(v);
        if u_root == v_root {
            return false;
        }
        match self.vertices[u_root].rank.cmp(&self.vertices[v_root].rank) {
            std::cmp::Ordering::Greater => self.vertices[v_root].parent = u_root,
            std::cmp::Ordering::Less => self.vertices[u_root].parent = v_root,
            std::cmp::Ordering::Equal => {
                self.vertices[u_root].parent = v_root;
                self.vertices[v_root].rank += 1;
            }
        }
        true
    }

    pub fn same_component(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }

    /// Number of disjoint sets currently in the forest.
    pub fn root_count(&self) -> usize {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(index, vertex)| vertex.parent == *index)
            .count()
    }

    /// Turns every vertex back into a rank-0 singleton.
    pub fn reset(&mut self) {
        for (index, vertex) in self.vertices.iter_mut().enumerate() {
            vertex.parent = index;
            vertex.rank = 0;
        }
    }

    pub fn is_reset(&self) -> bool {
        self.vertices
            .iter()
            .enumerate()
            .all(|(index, vertex)| vertex.parent == index && vertex.rank == 0)
    }
}
