use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::{line_ending, satisfy},
        combinator::{map, opt},
        error::Error,
        multi::many1,
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
    std::{
        cmp::Ordering,
        collections::{BTreeMap, BTreeSet, VecDeque},
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

/// A single-letter network node. Uppercase nodes are gateways the virus tries to reach; the virus
/// itself wakes up on node `a`.
#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct Node(char);

impl Node {
    fn is_gateway(self) -> bool {
        self.0.is_ascii_uppercase()
    }

    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(satisfy(|c: char| c.is_ascii_alphanumeric()), Self)(input)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// A gateway-adjacent link severed to contain the virus.
#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Link {
    gateway: Node,
    node: Node,
}

impl Display for Link {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-{}", self.gateway, self.node)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Default)]
struct Network {
    adjacencies: BTreeMap<Node, BTreeSet<Node>>,
}

impl Network {
    const START: Node = Node('a');

    fn from_edges<I: IntoIterator<Item = (Node, Node)>>(edges: I) -> Self {
        let mut network: Self = Self::default();

        for (from, to) in edges {
            network.adjacencies.entry(from).or_default().insert(to);
            network.adjacencies.entry(to).or_default().insert(from);
        }

        network
    }

    fn sever(&mut self, gateway: Node, node: Node) {
        if let Some(neighbors) = self.adjacencies.get_mut(&gateway) {
            neighbors.remove(&node);
        }

        if let Some(neighbors) = self.adjacencies.get_mut(&node) {
            neighbors.remove(&gateway);
        }
    }

    /// All routes from `from` to the nearest gateways, found by expanding one step at a time
    /// across every route of the current length. Routes never revisit a node, and only routes of
    /// the first length to reach a gateway are reported.
    fn shortest_routes(&self, from: Node, routes: &mut Vec<Vec<Node>>) {
        routes.clear();

        let mut queue: VecDeque<Vec<Node>> = VecDeque::new();

        queue.push_back(vec![from]);

        while !queue.is_empty() && routes.is_empty() {
            for _ in 0_usize..queue.len() {
                let route: Vec<Node> = queue.pop_front().unwrap();
                let last: Node = *route.last().unwrap();

                for neighbor in self
                    .adjacencies
                    .get(&last)
                    .into_iter()
                    .flatten()
                    .copied()
                {
                    if route.contains(&neighbor) {
                        continue;
                    }

                    let mut next_route: Vec<Node> = route.clone();

                    next_route.push(neighbor);

                    if neighbor.is_gateway() {
                        routes.push(next_route);
                    } else {
                        queue.push_back(next_route);
                    }
                }
            }
        }
    }
}

/// The route whose link gets severed this round: shortest first, then lowest gateway letter, then
/// lowest letter of the route's first step.
fn preferred_route(routes: &[Vec<Node>]) -> &Vec<Node> {
    let min_len: usize = routes.iter().map(Vec::len).min().unwrap();

    routes
        .iter()
        .filter(|route| route.len() == min_len)
        .min_by(|route_1, route_2| {
            route_1.last().cmp(&route_2.last()).then_with(|| {
                if route_1.len() > 1_usize && route_2.len() > 1_usize {
                    route_1[1_usize].cmp(&route_2[1_usize])
                } else {
                    Ordering::Equal
                }
            })
        })
        .unwrap()
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    network: Network,
}

impl Solution {
    /// Plays the containment game to completion: each round severs the preferred route's gateway
    /// link, then lets the virus advance one step along its new preferred route. Returns the links
    /// in severance order.
    fn contain(&self) -> Vec<Link> {
        let mut network: Network = self.network.clone();
        let mut current: Node = Network::START;
        let mut links: Vec<Link> = Vec::new();
        let mut routes: Vec<Vec<Node>> = Vec::new();

        loop {
            network.shortest_routes(current, &mut routes);

            if routes.is_empty() {
                break;
            }

            let route: &Vec<Node> = preferred_route(&routes);
            let gateway: Node = *route.last().unwrap();
            let node: Node = route[route.len() - 2_usize];

            links.push(Link { gateway, node });
            network.sever(gateway, node);
            network.shortest_routes(current, &mut routes);

            if let Some(route) = (!routes.is_empty()).then(|| preferred_route(&routes)) {
                if route.len() > 1_usize {
                    current = route[1_usize];
                }
            }
        }

        links
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many1(terminated(
                separated_pair(Node::parse, tag("-"), Node::parse),
                opt(line_ending),
            )),
            |edges| Self {
                network: Network::from_edges(edges),
            },
        )(input)
    }
}

impl RunSolution for Solution {
    fn run_internal(&mut self, args: &RunArgs) {
        let links: Vec<Link> = self.contain();

        if args.verbose {
            dbg!(links.len());
        }

        for link in links {
            println!("{link}");
        }
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
