//! The outer stage loop and its two-phase substage: Phase A scans
//! newly-discovered S-vertices for allowable edges, contracting blossoms or
//! augmenting as it finds them; Phase B computes the smallest of four
//! candidate dual updates and applies it, re-enabling Phase A to make
//! further progress.

use crate::graph::EdgeId;

use super::state::{label, BlossomState, Endpoint, Node};

impl BlossomState<'_> {
    /// Runs one full stage (reset, initial S-labeling, substage to
    /// termination, end-stage expansion). Returns `true` if this stage
    /// augmented the matching (more stages may still help), `false` if the
    /// stage ended without augmenting, meaning the matching is already
    /// optimal and the caller must stop.
    pub(super) fn run_stage(&mut self) -> bool {
        for i in 0..2 * self.n {
            self.label[i] = label::UNLABELED;
            self.labelend[i] = Endpoint::NONE;
            self.bestedge[i] = Node::NONE;
            self.blossombestedges[i] = None;
        }
        for allowed in self.allowedge.iter_mut() {
            *allowed = false;
        }
        self.queue.clear();

        for v in 0..self.n {
            if self.mate[v].is_none() && self.label[self.inblossom[v].get()] == label::UNLABELED {
                self.assign_label(v, label::S, Endpoint::NONE);
            }
        }

        let mut augmented = false;
        loop {
            if self.phase_a_scan() {
                augmented = true;
                break;
            }
            if !self.phase_b_delta_update() {
                break;
            }
        }

        for b in self.n..2 * self.n {
            if !self.blossombase[b].is_none()
                && self.blossomparent[b].is_none()
                && self.label[b] == label::S
                && self.dualvar[b] == 0
            {
                self.expand_blossom(b, true);
            }
        }

        augmented
    }

    /// Phase A: drains the queue of newly-labeled S-vertices, examining
    /// every incident edge. Returns `true` the moment an augmenting path is
    /// found and applied.
    fn phase_a_scan(&mut self) -> bool {
        while let Some(v) = self.queue.pop() {
            let endpoints = self.incident_endpoints(v).to_vec();

            for p in endpoints {
                let k = p.edge();
                let w = self.endpoint_vertex(p);

                if self.inblossom[v] == self.inblossom[w] {
                    continue;
                }

                let mut kslack = 0i64;
                if !self.allowedge[k.index()] {
                    kslack = self.slack(k);
                    if kslack <= 0 {
                        self.allowedge[k.index()] = true;
                    }
                }

                if self.allowedge[k.index()] {
                    let w_blossom_label = self.label[self.inblossom[w].get()];
                    if w_blossom_label == label::UNLABELED {
                        self.assign_label(w, label::T, p.peer());
                    } else if w_blossom_label == label::S {
                        let base = self.scan_blossom(Node::from(v), Node::from(w));
                        if !base.is_none() {
                            self.add_blossom(base, k);
                        } else {
                            self.augment_matching(k);
                            return true;
                        }
                    } else if self.label[w] == label::UNLABELED {
                        self.label[w] = label::T;
                        self.labelend[w] = p.peer();
                    }
                } else if self.label[self.inblossom[w].get()] == label::S {
                    let b = self.inblossom[v].get();
                    if self.bestedge[b].is_none() || kslack < self.slack(self.bestedge_id(b)) {
                        self.bestedge[b] = Node(k.index() as i64);
                    }
                } else if self.label[w] == label::UNLABELED
                    && (self.bestedge[w].is_none() || kslack < self.slack(self.bestedge_id(w)))
                {
                    self.bestedge[w] = Node(k.index() as i64);
                }
            }
        }

        false
    }

    fn bestedge_id(&self, node: usize) -> EdgeId {
        EdgeId(self.bestedge[node].get() as u32)
    }

    /// Phase B: computes the smallest of the four candidate dual updates,
    /// applies it to every dual variable, then acts according to which
    /// candidate won. Returns `false` for a type-1 delta: no further
    /// progress is possible, so the stage (and the algorithm) terminates.
    fn phase_b_delta_update(&mut self) -> bool {
        let delta1 = (0..self.n).map(|v| self.dualvar[v]).min().unwrap_or(0);
        let mut delta = delta1;
        let mut delta_type = 1u8;
        let mut delta_edge: Option<EdgeId> = None;
        let mut delta_blossom: Option<usize> = None;

        for v in 0..self.n {
            if self.label[self.inblossom[v].get()] == label::UNLABELED && !self.bestedge[v].is_none() {
                let edge_id = self.bestedge_id(v);
                let d = self.slack(edge_id);
                if d < delta {
                    delta = d;
                    delta_type = 2;
                    delta_edge = Some(edge_id);
                }
            }
        }

        for b in 0..2 * self.n {
            if self.blossomparent[b].is_none() && self.label[b] == label::S && !self.bestedge[b].is_none() {
                let edge_id = self.bestedge_id(b);
                let kslack = self.slack(edge_id);
                debug_assert_eq!(kslack % 2, 0, "S-blossom slack must be even for integer weights");
                let d = kslack / 2;
                if d < delta {
                    delta = d;
                    delta_type = 3;
                    delta_edge = Some(edge_id);
                }
            }
        }

        for b in self.n..2 * self.n {
            if !self.blossombase[b].is_none()
                && self.blossomparent[b].is_none()
                && self.label[b] == label::T
                && self.dualvar[b] < delta
            {
                delta = self.dualvar[b];
                delta_type = 4;
                delta_blossom = Some(b);
            }
        }

        for v in 0..self.n {
            match self.label[self.inblossom[v].get()] {
                label::S => self.dualvar[v] -= delta,
                label::T => self.dualvar[v] += delta,
                _ => {}
            }
        }
        for b in self.n..2 * self.n {
            if !self.blossombase[b].is_none() && self.blossomparent[b].is_none() {
                match self.label[b] {
                    label::S => self.dualvar[b] += delta,
                    label::T => self.dualvar[b] -= delta,
                    _ => {}
                }
            }
        }

        match delta_type {
            1 => false,
            2 => {
                let k = delta_edge.expect("type-2 delta must carry an edge");
                let edge = self.graph.edge(k);
                let (mut v, mut w) = (edge.from.index(), edge.to.index());
                self.allowedge[k.index()] = true;
                if self.label[self.inblossom[v].get()] == label::UNLABELED {
                    std::mem::swap(&mut v, &mut w);
                }
                self.queue.push(v);
                true
            }
            3 => {
                let k = delta_edge.expect("type-3 delta must carry an edge");
                self.allowedge[k.index()] = true;
                let v = self.graph.edge(k).from.index();
                self.queue.push(v);
                true
            }
            4 => {
                self.expand_blossom(delta_blossom.expect("type-4 delta must carry a blossom"), false);
                true
            }
            _ => unreachable!("invalid delta type"),
        }
    }

    /// For each matched vertex, recovers its matched edge, deduped by edge
    /// id (both endpoints' `mate` point into the same edge).
    pub(super) fn extract_matching(&self) -> Vec<EdgeId> {
        let mut seen = vec![false; self.nedge];
        let mut result = Vec::new();

        for v in 0..self.n {
            if self.mate[v].is_none() {
                continue;
            }
            let k = self.mate[v].edge();
            if !seen[k.index()] {
                seen[k.index()] = true;
                result.push(k);
            }
        }

        result
    }
}
