//! `add_blossom`, `expand_blossom`, `augment_blossom`, and
//! `augment_matching`: the operations that contract a newly-discovered odd
//! cycle into a blossom, expand a zero-dual blossom back into its
//! children, and flip matched/unmatched edges along an augmenting path
//! once one is found.

use crate::graph::EdgeId;

use super::state::{label, BlossomState, Endpoint, Node};

impl BlossomState<'_> {
    /// Contracts the odd-length alternating cycle between `v`/`w` (the
    /// endpoints of edge `k`) and `base` into a fresh blossom.
    pub(super) fn add_blossom(&mut self, base: Node, k: EdgeId) {
        let edge = self.graph.edge(k);
        let (mut v, mut w) = (edge.from.index(), edge.to.index());
        let bb = self.inblossom[base.get()].get();
        let mut bv = self.inblossom[v].get();
        let mut bw = self.inblossom[w].get();

        let b = self.unusedblossoms.pop().expect("blossom pool exhausted").get();

        self.blossombase[b] = base;
        self.blossomparent[b] = Node::NONE;
        self.blossomparent[bb] = Node::from(b);

        let mut path: Vec<Node> = Vec::new();
        let mut endps: Vec<Endpoint> = Vec::new();

        while bv != bb {
            self.blossomparent[bv] = Node::from(b);
            path.push(Node::from(bv));
            endps.push(self.labelend[bv]);
            v = self.endpoint_vertex(self.labelend[bv]);
            bv = self.inblossom[v].get();
        }
        path.push(Node::from(bb));
        path.reverse();
        endps.reverse();
        endps.push(Endpoint((2 * k.index()) as i64));

        while bw != bb {
            self.blossomparent[bw] = Node::from(b);
            path.push(Node::from(bw));
            endps.push(self.labelend[bw].peer());
            w = self.endpoint_vertex(self.labelend[bw]);
            bw = self.inblossom[w].get();
        }

        self.label[b] = label::S;
        self.labelend[b] = self.labelend[bb];
        self.dualvar[b] = 0;

        self.blossomchilds[b] = path.clone();
        self.blossomendps[b] = endps;

        for leaf in self.blossom_leaves(Node::from(b)) {
            if self.label[self.inblossom[leaf].get()] == label::T {
                self.queue.push(leaf);
            }
            self.inblossom[leaf] = Node::from(b);
        }

        let mut bestedgeto = vec![Node::NONE; 2 * self.n];
        for &child in &path {
            let bv = child.get();

            let candidate_edges: Vec<EdgeId> = match &self.blossombestedges[bv] {
                Some(cached) => cached.clone(),
                None => self
                    .blossom_leaves(Node::from(bv))
                    .into_iter()
                    .flat_map(|leaf| self.incident_endpoints(leaf).iter().map(|p| p.edge()).collect::<Vec<_>>())
                    .collect(),
            };

            for candidate in candidate_edges {
                let candidate_edge = self.graph.edge(candidate);
                let (i, j) = (candidate_edge.from.index(), candidate_edge.to.index());
                let (_inner, outer) = if self.inblossom[j].get() == b { (j, i) } else { (i, j) };
                let bj = self.inblossom[outer].get();

                if bj != b && self.label[bj] == label::S {
                    let better = bestedgeto[bj].is_none() || self.slack(candidate) < self.slack(EdgeId(bestedgeto[bj].get() as u32));
                    if better {
                        bestedgeto[bj] = Node(candidate.index() as i64);
                    }
                }
            }

            self.blossombestedges[bv] = None;
            self.bestedge[bv] = Node::NONE;
        }

        let computed: Vec<EdgeId> = bestedgeto
            .into_iter()
            .filter(|n| !n.is_none())
            .map(|n| EdgeId(n.get() as u32))
            .collect();

        self.bestedge[b] = Node::NONE;
        for &k in &computed {
            if self.bestedge[b].is_none() || self.slack(k) < self.slack(EdgeId(self.bestedge[b].get() as u32)) {
                self.bestedge[b] = Node(k.index() as i64);
            }
        }
        self.blossombestedges[b] = Some(computed);
    }

    /// Promotes every sub-blossom of `b` back to top-level, recursing into
    /// zero-dual sub-blossoms at end-of-stage. For an intra-stage expansion
    /// of a T-blossom, also relabels the alternating path from the entry
    /// child back to the base so the substage can continue.
    pub(super) fn expand_blossom(&mut self, b: usize, endstage: bool) {
        for &s in &self.blossomchilds[b].clone() {
            self.blossomparent[s.get()] = Node::NONE;
            if s.get() < self.n {
                self.inblossom[s.get()] = s;
            } else if endstage && self.dualvar[s.get()] == 0 {
                self.expand_blossom(s.get(), endstage);
            } else {
                for leaf in self.blossom_leaves(s) {
                    self.inblossom[leaf] = s;
                }
            }
        }

        if !endstage && self.label[b] == label::T {
            self.relabel_expanded_t_blossom(b);
        }

        self.label[b] = label::UNLABELED;
        self.labelend[b] = Endpoint::NONE;
        self.blossomchilds[b] = Vec::new();
        self.blossomendps[b] = Vec::new();
        self.blossombase[b] = Node::NONE;
        self.blossombestedges[b] = None;
        self.bestedge[b] = Node::NONE;
        self.unusedblossoms.push(Node::from(b));
    }

    /// The intra-stage-expansion relabeling walk from `expand_blossom`,
    /// split out for readability: steps pairs of (T-sub, S-sub) from the
    /// entry child back to the base, marking connecting edges allowable and
    /// assigning labels, then relabels any remaining child with a reachable
    /// interior vertex to T.
    fn relabel_expanded_t_blossom(&mut self, b: usize) {
        let entry_vertex = self.endpoint_vertex(self.labelend[b].peer());
        let entrychild = self.inblossom[entry_vertex];
        let childs = self.blossomchilds[b].clone();
        let endps = self.blossomendps[b].clone();
        let k = childs.len();

        let mut j = childs.iter().position(|&c| c == entrychild).expect("entry child must be present") as i64;

        let (jstep, endptrick): (i64, i64) = if j & 1 != 0 {
            j -= k as i64;
            (1, 0)
        } else {
            (-1, 1)
        };

        let mut p = self.labelend[b];
        while j != 0 {
            let idx_a = rem_euclid(j - endptrick, k);
            self.label[self.endpoint_vertex(p.peer())] = label::UNLABELED;
            self.label[self.endpoint_vertex(Endpoint(endps[idx_a].0 ^ endptrick ^ 1))] = label::UNLABELED;
            let assign_target = self.endpoint_vertex(p.peer());
            self.assign_label(assign_target, label::T, p);
            self.allowedge[endps[idx_a].edge().index()] = true;
            j += jstep;

            let idx_b = rem_euclid(j - endptrick, k);
            p = Endpoint(endps[idx_b].0 ^ endptrick);
            self.allowedge[p.edge().index()] = true;
            j += jstep;
        }

        let bv = childs[rem_euclid(j, k)];
        self.label[self.endpoint_vertex(p.peer())] = label::T;
        self.label[bv.get()] = label::T;
        self.labelend[self.endpoint_vertex(p.peer())] = p;
        self.labelend[bv.get()] = p;
        self.bestedge[bv.get()] = Node::NONE;
        j += jstep;

        while childs[rem_euclid(j, k)] != entrychild {
            let bv = childs[rem_euclid(j, k)];
            if self.label[bv.get()] == label::S {
                j += jstep;
                continue;
            }
            let mut reachable = None;
            for leaf in self.blossom_leaves(bv) {
                if self.label[leaf] != label::UNLABELED {
                    reachable = Some(leaf);
                    break;
                }
            }
            if let Some(v) = reachable {
                debug_assert_eq!(self.label[v], label::T);
                debug_assert_eq!(self.inblossom[v], bv);
                self.label[v] = label::UNLABELED;
                let base_mate = self.mate[self.blossombase[bv.get()].get()];
                self.label[self.endpoint_vertex(base_mate)] = label::UNLABELED;
                let p = self.labelend[v];
                self.assign_label(v, label::T, p);
            }
            j += jstep;
        }
    }

    /// Reshuffles the internal pairing of blossom `b` so that vertex `v`
    /// becomes its new base, recursing into any sub-blossom it passes
    /// through along the way.
    pub(super) fn augment_blossom(&mut self, b: usize, v: usize) {
        let mut t = Node::from(v);
        while self.blossomparent[t.get()] != Node::from(b) {
            t = self.blossomparent[t.get()];
        }
        if t.get() >= self.n {
            self.augment_blossom(t.get(), v);
        }

        let childs = self.blossomchilds[b].clone();
        let endps = self.blossomendps[b].clone();
        let k = childs.len();
        let i = childs.iter().position(|&c| c == t).expect("t must be a child of b") as i64;
        let mut j = i;

        let (jstep, endptrick): (i64, i64) = if j & 1 != 0 {
            j -= k as i64;
            (1, 0)
        } else {
            (-1, 1)
        };

        while j != 0 {
            j += jstep;
            let t1 = childs[rem_euclid(j, k)];
            let p1 = Endpoint(endps[rem_euclid(j - endptrick, k)].0 ^ endptrick);
            if t1.get() >= self.n {
                self.augment_blossom(t1.get(), self.endpoint_vertex(p1));
            }

            j += jstep;
            let t2 = childs[rem_euclid(j, k)];
            let p2 = Endpoint(endps[rem_euclid(j - endptrick, k)].0 ^ endptrick ^ 1);
            if t2.get() >= self.n {
                self.augment_blossom(t2.get(), self.endpoint_vertex(p2));
            }

            self.mate[self.endpoint_vertex(p1)] = p1.peer();
            self.mate[self.endpoint_vertex(p2)] = p2.peer();
        }

        let rotated_childs: Vec<Node> = childs[i as usize..].iter().chain(childs[..i as usize].iter()).copied().collect();
        let rotated_endps: Vec<Endpoint> = endps[i as usize..].iter().chain(endps[..i as usize].iter()).copied().collect();
        self.blossomchilds[b] = rotated_childs;
        self.blossomendps[b] = rotated_endps;
        self.blossombase[b] = self.blossombase[self.blossomchilds[b][0].get()];
        debug_assert_eq!(self.blossombase[b].get(), v);
    }

    /// Walks outward from both endpoints of edge `k`, alternating through
    /// S-blossoms via `labelend`, flipping matched and unmatched edges so
    /// `k` joins the matching.
    pub(super) fn augment_matching(&mut self, k: EdgeId) {
        let edge = self.graph.edge(k);
        let start = [
            (edge.from.index(), Endpoint((2 * k.index() + 1) as i64)),
            (edge.to.index(), Endpoint((2 * k.index()) as i64)),
        ];

        for (mut s, mut p) in start {
            loop {
                let bs = self.inblossom[s].get();
                debug_assert_eq!(self.label[bs], label::S);

                if bs >= self.n {
                    self.augment_blossom(bs, s);
                }
                self.mate[s] = p;

                if self.labelend[bs].is_none() {
                    break;
                }

                let t = self.endpoint_vertex(self.labelend[bs]);
                let bt = self.inblossom[t].get();
                debug_assert_eq!(self.label[bt], label::T);

                let reach = self.labelend[bt];
                s = self.endpoint_vertex(reach);
                let j = self.endpoint_vertex(reach.peer());

                if bt >= self.n {
                    self.augment_blossom(bt, j);
                }
                self.mate[j] = reach;
                p = reach.peer();
            }
        }
    }
}

/// Euclidean remainder so a negative `j` (from stepping `jstep = -1`) wraps
/// into `[0, modulus)` the way Python's `%` does, matching the reference
/// cyclic indexing into `blossomchilds`/`blossomendps`.
fn rem_euclid(j: i64, modulus: usize) -> usize {
    j.rem_euclid(modulus as i64) as usize
}
