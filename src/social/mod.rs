//! Social layer: distance metric, friendship edits, network building and stats

pub mod distance;
pub mod friends;
pub mod groups;
pub mod network;

pub use distance::{distance, political_distance, DistanceConfig, DistanceMode, SharedFriendBonus};
pub use friends::{add_friend, closest, farthest_friend, remove_friend};
pub use groups::{
    clustering_coefficient, degree_histogram, friend_group_sizes, label_friend_groups, mean_degree,
};
pub use network::{build_friend_network, friend_cap, FriendNetworkConfig, NetworkReport, PassStats};
