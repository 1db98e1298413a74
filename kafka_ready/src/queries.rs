pub mod wait_cluster_ready;
