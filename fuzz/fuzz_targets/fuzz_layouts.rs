#![no_main]
use libfuzzer_sys::fuzz_target;
use skyppm::*;

fuzz_target!(|data: &[u8]| {
    // Every layout must store and emit exactly the same pixels.
    let [w, h, fill, rest @ ..] = data else {
        return;
    };
    let width = *w as usize % 32 + 1;
    let height = *h as usize % 64 + 1;

    let outputs: Vec<Vec<u8>> = PixelLayout::ALL
        .into_iter()
        .map(|layout| {
            let mut buf = create_buffer(layout, width, height, &Limits::default()).unwrap();
            if fill % 2 == 0 {
                fill_sky(buf.as_mut(), &enough::Unstoppable).unwrap();
            }
            for (i, rgb) in rest.chunks_exact(3).take(buf.len()).enumerate() {
                buf.set(i, rgb[0], rgb[1], rgb[2]);
            }
            for (i, rgb) in rest.chunks_exact(3).take(buf.len()).enumerate() {
                assert_eq!(buf.get(i), RGB8::new(rgb[0], rgb[1], rgb[2]));
            }
            encode_ppm_to_vec(buf.as_ref(), HeaderOrder::HeightFirst, enough::Unstoppable)
                .unwrap()
        })
        .collect();

    assert_eq!(outputs[0], outputs[1], "interleaved vs packed mismatch");
    assert_eq!(outputs[1], outputs[2], "packed vs planar mismatch");
});
