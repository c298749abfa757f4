//! Every sampling strategy on one small survey frame.
//!
//! Run with `RUST_LOG=hyohon=trace` to see apportionment and systematic-walk
//! events.

use hyohon::{apportion, Sampler};
use indexmap::IndexMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let data = vec![
        10.0, 11.0, 12.0, 13.0, 20.0, 21.0, 22.0, 23.0, 24.0, 30.0, 31.0, 32.0, 40.0, 41.0, 42.0,
        43.0, 44.0, 45.0,
    ];
    let labels = [1, 1, 1, 1, 0, 0, 0, 0, 0, 2, 2, 2, 3, 3, 3, 3, 3, 3];

    let mut regions: IndexMap<&str, Vec<f64>> = IndexMap::new();
    regions.insert("north", vec![1.0, 2.0, 3.0]);
    regions.insert("south", vec![10.0, 20.0, 30.0, 40.0]);
    regions.insert("coast", vec![100.0, 200.0]);

    let sampler = Sampler::new().with_seed(7);

    println!("simple random (5):     {:?}", sampler.simple_random(&data, 5));
    println!("systematic (4):        {:?}", sampler.systematic(&data, 4));
    println!("systematic sorted (4): {:?}", sampler.systematic_sorted(&data, 4));

    let allocation = apportion([(1, 4usize), (0, 5), (2, 3), (3, 6)], 8);
    let quotas: Vec<_> = allocation.iter().collect();
    println!("stratum quotas for 8:  {quotas:?} (total {})", allocation.total());
    println!("stratified (8):        {:?}", sampler.stratified(&data, &labels, 8));
    println!("stratified by region:  {:?}", sampler.stratified_grouped(&regions, 5));

    let quota_table: IndexMap<&str, usize> = [("north", 2), ("south", 3), ("coast", 1)]
        .into_iter()
        .collect();
    println!("quota:                 {:?}", sampler.quota_sample(&regions, &quota_table));
    println!("haphazard (5):         {:?}", sampler.haphazard_sample_grouped(&regions, 5));
    println!("convenience (5):       {:?}", sampler.convenience_sample_grouped(&regions, 5));

    Ok(())
}
