//! Property: the collection stays name-sorted under arbitrary creates.

mod common;

use proptest::prelude::*;

use siteline_core::NewRecord;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn collection_is_sorted_after_any_create_sequence(
        names in proptest::collection::vec("[a-z]{1,12}", 1..8)
    ) {
        let rt = tokio::runtime::Runtime::new().expect("runtime");
        rt.block_on(async {
            let (store, seeded) = common::seeded_store(&[]);
            store.fetch_records(None).await;

            for name in &names {
                let created = store
                    .create_record(NewRecord {
                        record_type_id: seeded.type_id,
                        name: name.clone(),
                        address: None,
                    })
                    .await;
                prop_assert!(created.is_some());

                let collection = common::collection_names(&store);
                let mut sorted = collection.clone();
                sorted.sort();
                prop_assert_eq!(collection, sorted);
            }
            Ok(())
        })?;
    }
}
