use log::debug;

use super::path::SearchTree;
use super::Path;
use super::PathId;
use super::PriorityFrontier;
use super::SearchFrontier;
use super::SearchProblem;
use super::TieBreaking;
use crate::containers::HashSet;
use crate::create_statistics_struct;
use crate::termination::TerminationCondition;

create_statistics_struct!(
    /// Counters maintained by an [`AStarSearcher`].
    pub SearchStatistics {
        /// The number of nodes whose neighbours were generated.
        num_nodes_expanded: u64,
        /// The number of nodes pushed onto the frontier, including the start node.
        num_nodes_generated: u64,
        /// The number of popped nodes which had already been expanded.
        num_nodes_skipped: u64,
        /// The largest number of entries on the frontier at any point.
        peak_frontier_size: u64,
});

/// The outcome of [`AStarSearcher::search`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult<Node> {
    /// A path to a goal node.
    Found(Path<Node>),
    /// The frontier ran empty; there is no (further) goal node.
    Exhausted,
    /// The termination condition fired before a goal was found.
    Unknown,
}

impl<Node> SearchResult<Node> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }
}

/// A best-first searcher which expands nodes in order of `g + h`.
///
/// A node is expanded at most once. The heuristic is not required to be admissible, in which case
/// the first goal found need not be the cheapest one. Calling [`AStarSearcher::search`] again after
/// a goal was found continues from the remaining frontier.
#[derive(Debug)]
pub struct AStarSearcher<Problem: SearchProblem, Frontier = PriorityFrontier<PathId>> {
    problem: Problem,
    frontier: Frontier,
    tree: SearchTree<Problem::Node>,
    expanded: HashSet<Problem::Node>,
    statistics: SearchStatistics,
}

impl<Problem: SearchProblem> AStarSearcher<Problem> {
    pub fn new(problem: Problem, tie_breaking: TieBreaking) -> Self {
        AStarSearcher::with_frontier(problem, PriorityFrontier::new(tie_breaking))
    }
}

impl<Problem, Frontier> AStarSearcher<Problem, Frontier>
where
    Problem: SearchProblem,
    Frontier: SearchFrontier<PathId>,
{
    /// Creates a searcher and puts the start node of `problem` on the (empty) `frontier`.
    pub fn with_frontier(problem: Problem, frontier: Frontier) -> Self {
        let mut searcher = AStarSearcher {
            problem,
            frontier,
            tree: SearchTree::default(),
            expanded: HashSet::default(),
            statistics: SearchStatistics::default(),
        };

        let start = searcher.problem.start_node();
        let priority = searcher.problem.heuristic(&start);
        searcher.generate(start, None, 0, priority);

        searcher
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    pub fn search(
        &mut self,
        termination: &mut impl TerminationCondition,
    ) -> SearchResult<Problem::Node> {
        while !self.frontier.is_empty() {
            if termination.should_stop() {
                debug!("search stopped by the termination condition");
                return SearchResult::Unknown;
            }

            let Some((priority, path_id)) = self.frontier.pop() else {
                break;
            };
            let node = self.tree.node(path_id).clone();

            if self.problem.is_goal(&node) {
                debug!(
                    "found a goal with cost {} after expanding {} nodes",
                    self.tree.cost(path_id),
                    self.statistics.num_nodes_expanded
                );
                return SearchResult::Found(self.tree.path(path_id));
            }

            if self.expanded.contains(&node) {
                self.statistics.num_nodes_skipped += 1;
                continue;
            }

            termination.node_has_been_expanded();
            self.statistics.num_nodes_expanded += 1;

            let cost = self.tree.cost(path_id);
            debug!("expanding {node:?} with f = {priority} and g = {cost}");

            for edge in self.problem.neighbours(&node) {
                let child_cost = cost + edge.cost;
                let child_priority = child_cost + self.problem.heuristic(&edge.to);
                self.generate(edge.to, Some(path_id), child_cost, child_priority);
            }

            let _ = self.expanded.insert(node);
        }

        debug!(
            "frontier exhausted after generating {} nodes",
            self.tree.len()
        );
        SearchResult::Exhausted
    }

    fn generate(&mut self, node: Problem::Node, parent: Option<PathId>, cost: i64, priority: i64) {
        let path_id = self.tree.push(node, parent, cost);
        self.frontier.push(priority, path_id);

        self.statistics.num_nodes_generated += 1;
        self.statistics.peak_frontier_size = self
            .statistics
            .peak_frontier_size
            .max(self.frontier.len() as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Edge;
    use crate::termination::Indefinite;
    use crate::termination::NodeBudget;

    /// A weighted graph given by its edge list.
    struct Graph {
        edges: Vec<(char, char, i64)>,
        heuristic: Vec<(char, i64)>,
        goal: char,
    }

    impl SearchProblem for Graph {
        type Node = char;

        fn start_node(&self) -> char {
            'a'
        }

        fn is_goal(&self, node: &char) -> bool {
            *node == self.goal
        }

        fn neighbours(&mut self, node: &char) -> Vec<Edge<char>> {
            self.edges
                .iter()
                .filter(|(from, _, _)| from == node)
                .map(|&(_, to, cost)| Edge::new(to, cost))
                .collect()
        }

        fn heuristic(&self, node: &char) -> i64 {
            self.heuristic
                .iter()
                .find(|(n, _)| n == node)
                .map(|&(_, h)| h)
                .unwrap_or(0)
        }
    }

    fn diamond(heuristic: Vec<(char, i64)>) -> Graph {
        Graph {
            edges: vec![('a', 'b', 1), ('a', 'c', 4), ('b', 'd', 5), ('c', 'd', 1)],
            heuristic,
            goal: 'd',
        }
    }

    #[test]
    fn finds_cheapest_path_without_heuristic() {
        let mut searcher = AStarSearcher::new(diamond(vec![]), TieBreaking::Lifo);

        let SearchResult::Found(path) = searcher.search(&mut Indefinite) else {
            panic!("expected a path");
        };

        assert_eq!(path.nodes(), &['a', 'c', 'd']);
        assert_eq!(path.cost(), 5);
    }

    #[test]
    fn misleading_heuristic_is_followed() {
        let mut searcher = AStarSearcher::new(diamond(vec![('c', 100)]), TieBreaking::Lifo);

        let SearchResult::Found(path) = searcher.search(&mut Indefinite) else {
            panic!("expected a path");
        };

        assert_eq!(path.nodes(), &['a', 'b', 'd']);
        assert_eq!(path.cost(), 6);
    }

    #[test]
    fn search_continues_after_a_goal() {
        let mut searcher = AStarSearcher::new(diamond(vec![]), TieBreaking::Lifo);

        assert!(searcher.search(&mut Indefinite).is_found());
        assert!(searcher.search(&mut Indefinite).is_found());
        assert_eq!(searcher.search(&mut Indefinite), SearchResult::Exhausted);
    }

    #[test]
    fn unreachable_goal_exhausts_the_frontier() {
        let mut graph = diamond(vec![]);
        graph.goal = 'z';
        let mut searcher = AStarSearcher::new(graph, TieBreaking::Lifo);

        assert_eq!(searcher.search(&mut Indefinite), SearchResult::Exhausted);
        assert_eq!(searcher.statistics().num_nodes_expanded, 4);
    }

    #[test]
    fn nodes_are_expanded_once() {
        let graph = Graph {
            edges: vec![('a', 'b', 1), ('b', 'a', 1), ('a', 'c', 1), ('c', 'b', 1)],
            heuristic: vec![],
            goal: 'z',
        };
        let mut searcher = AStarSearcher::new(graph, TieBreaking::Fifo);

        assert_eq!(searcher.search(&mut Indefinite), SearchResult::Exhausted);
        assert_eq!(searcher.statistics().num_nodes_expanded, 3);
        assert!(searcher.statistics().num_nodes_skipped > 0);
    }

    #[test]
    fn node_budget_stops_the_search() {
        let mut graph = diamond(vec![]);
        graph.goal = 'z';
        let mut searcher = AStarSearcher::new(graph, TieBreaking::Lifo);

        let result = searcher.search(&mut NodeBudget::new(2));

        assert_eq!(result, SearchResult::Unknown);
        assert_eq!(searcher.statistics().num_nodes_expanded, 2);
    }
}
