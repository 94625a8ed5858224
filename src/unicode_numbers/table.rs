// Generated by tools/gen_unicode_numbers.py from Unicode 14.0.0. Do not edit.

pub(super) const UNICODE_VERSION: &str = "14.0.0";

#[rustfmt::skip]
pub(super) static NUMERIC: &[(char, f64)] = &[
    ('\u{b2}', 2.0), ('\u{b3}', 3.0), ('\u{b9}', 1.0), ('\u{bc}', 0.25),
    ('\u{bd}', 0.5), ('\u{be}', 0.75), ('\u{660}', 0.0), ('\u{661}', 1.0),
    ('\u{662}', 2.0), ('\u{663}', 3.0), ('\u{664}', 4.0), ('\u{665}', 5.0),
    ('\u{666}', 6.0), ('\u{667}', 7.0), ('\u{668}', 8.0), ('\u{669}', 9.0),
    ('\u{6f0}', 0.0), ('\u{6f1}', 1.0), ('\u{6f2}', 2.0), ('\u{6f3}', 3.0),
    ('\u{6f4}', 4.0), ('\u{6f5}', 5.0), ('\u{6f6}', 6.0), ('\u{6f7}', 7.0),
    ('\u{6f8}', 8.0), ('\u{6f9}', 9.0), ('\u{7c0}', 0.0), ('\u{7c1}', 1.0),
    ('\u{7c2}', 2.0), ('\u{7c3}', 3.0), ('\u{7c4}', 4.0), ('\u{7c5}', 5.0),
    ('\u{7c6}', 6.0), ('\u{7c7}', 7.0), ('\u{7c8}', 8.0), ('\u{7c9}', 9.0),
    ('\u{966}', 0.0), ('\u{967}', 1.0), ('\u{968}', 2.0), ('\u{969}', 3.0),
    ('\u{96a}', 4.0), ('\u{96b}', 5.0), ('\u{96c}', 6.0), ('\u{96d}', 7.0),
    ('\u{96e}', 8.0), ('\u{96f}', 9.0), ('\u{9e6}', 0.0), ('\u{9e7}', 1.0),
    ('\u{9e8}', 2.0), ('\u{9e9}', 3.0), ('\u{9ea}', 4.0), ('\u{9eb}', 5.0),
    ('\u{9ec}', 6.0), ('\u{9ed}', 7.0), ('\u{9ee}', 8.0), ('\u{9ef}', 9.0),
    ('\u{9f4}', 0.0625), ('\u{9f5}', 0.125), ('\u{9f6}', 0.1875), ('\u{9f7}', 0.25),
    ('\u{9f8}', 0.75), ('\u{9f9}', 16.0), ('\u{a66}', 0.0), ('\u{a67}', 1.0),
    ('\u{a68}', 2.0), ('\u{a69}', 3.0), ('\u{a6a}', 4.0), ('\u{a6b}', 5.0),
    ('\u{a6c}', 6.0), ('\u{a6d}', 7.0), ('\u{a6e}', 8.0), ('\u{a6f}', 9.0),
    ('\u{ae6}', 0.0), ('\u{ae7}', 1.0), ('\u{ae8}', 2.0), ('\u{ae9}', 3.0),
    ('\u{aea}', 4.0), ('\u{aeb}', 5.0), ('\u{aec}', 6.0), ('\u{aed}', 7.0),
    ('\u{aee}', 8.0), ('\u{aef}', 9.0), ('\u{b66}', 0.0), ('\u{b67}', 1.0),
    ('\u{b68}', 2.0), ('\u{b69}', 3.0), ('\u{b6a}', 4.0), ('\u{b6b}', 5.0),
    ('\u{b6c}', 6.0), ('\u{b6d}', 7.0), ('\u{b6e}', 8.0), ('\u{b6f}', 9.0),
    ('\u{b72}', 0.25), ('\u{b73}', 0.5), ('\u{b74}', 0.75), ('\u{b75}', 0.0625),
    ('\u{b76}', 0.125), ('\u{b77}', 0.1875), ('\u{be6}', 0.0), ('\u{be7}', 1.0),
    ('\u{be8}', 2.0), ('\u{be9}', 3.0), ('\u{bea}', 4.0), ('\u{beb}', 5.0),
    ('\u{bec}', 6.0), ('\u{bed}', 7.0), ('\u{bee}', 8.0), ('\u{bef}', 9.0),
    ('\u{bf0}', 10.0), ('\u{bf1}', 100.0), ('\u{bf2}', 1000.0), ('\u{c66}', 0.0),
    ('\u{c67}', 1.0), ('\u{c68}', 2.0), ('\u{c69}', 3.0), ('\u{c6a}', 4.0),
    ('\u{c6b}', 5.0), ('\u{c6c}', 6.0), ('\u{c6d}', 7.0), ('\u{c6e}', 8.0),
    ('\u{c6f}', 9.0), ('\u{c78}', 0.0), ('\u{c79}', 1.0), ('\u{c7a}', 2.0),
    ('\u{c7b}', 3.0), ('\u{c7c}', 1.0), ('\u{c7d}', 2.0), ('\u{c7e}', 3.0),
    ('\u{ce6}', 0.0), ('\u{ce7}', 1.0), ('\u{ce8}', 2.0), ('\u{ce9}', 3.0),
    ('\u{cea}', 4.0), ('\u{ceb}', 5.0), ('\u{cec}', 6.0), ('\u{ced}', 7.0),
    ('\u{cee}', 8.0), ('\u{cef}', 9.0), ('\u{d58}', 0.00625), ('\u{d59}', 0.025),
    ('\u{d5a}', 0.0375), ('\u{d5b}', 0.05), ('\u{d5c}', 0.1), ('\u{d5d}', 0.15),
    ('\u{d5e}', 0.2), ('\u{d66}', 0.0), ('\u{d67}', 1.0), ('\u{d68}', 2.0),
    ('\u{d69}', 3.0), ('\u{d6a}', 4.0), ('\u{d6b}', 5.0), ('\u{d6c}', 6.0),
    ('\u{d6d}', 7.0), ('\u{d6e}', 8.0), ('\u{d6f}', 9.0), ('\u{d70}', 10.0),
    ('\u{d71}', 100.0), ('\u{d72}', 1000.0), ('\u{d73}', 0.25), ('\u{d74}', 0.5),
    ('\u{d75}', 0.75), ('\u{d76}', 0.0625), ('\u{d77}', 0.125), ('\u{d78}', 0.1875),
    ('\u{de6}', 0.0), ('\u{de7}', 1.0), ('\u{de8}', 2.0), ('\u{de9}', 3.0),
    ('\u{dea}', 4.0), ('\u{deb}', 5.0), ('\u{dec}', 6.0), ('\u{ded}', 7.0),
    ('\u{dee}', 8.0), ('\u{def}', 9.0), ('\u{e50}', 0.0), ('\u{e51}', 1.0),
    ('\u{e52}', 2.0), ('\u{e53}', 3.0), ('\u{e54}', 4.0), ('\u{e55}', 5.0),
    ('\u{e56}', 6.0), ('\u{e57}', 7.0), ('\u{e58}', 8.0), ('\u{e59}', 9.0),
    ('\u{ed0}', 0.0), ('\u{ed1}', 1.0), ('\u{ed2}', 2.0), ('\u{ed3}', 3.0),
    ('\u{ed4}', 4.0), ('\u{ed5}', 5.0), ('\u{ed6}', 6.0), ('\u{ed7}', 7.0),
    ('\u{ed8}', 8.0), ('\u{ed9}', 9.0), ('\u{f20}', 0.0), ('\u{f21}', 1.0),
    ('\u{f22}', 2.0), ('\u{f23}', 3.0), ('\u{f24}', 4.0), ('\u{f25}', 5.0),
    ('\u{f26}', 6.0), ('\u{f27}', 7.0), ('\u{f28}', 8.0), ('\u{f29}', 9.0),
    ('\u{f2a}', 0.5), ('\u{f2b}', 1.5), ('\u{f2c}', 2.5), ('\u{f2d}', 3.5),
    ('\u{f2e}', 4.5), ('\u{f2f}', 5.5), ('\u{f30}', 6.5), ('\u{f31}', 7.5),
    ('\u{f32}', 8.5), ('\u{f33}', -0.5), ('\u{1040}', 0.0), ('\u{1041}', 1.0),
    ('\u{1042}', 2.0), ('\u{1043}', 3.0), ('\u{1044}', 4.0), ('\u{1045}', 5.0),
    ('\u{1046}', 6.0), ('\u{1047}', 7.0), ('\u{1048}', 8.0), ('\u{1049}', 9.0),
    ('\u{1090}', 0.0), ('\u{1091}', 1.0), ('\u{1092}', 2.0), ('\u{1093}', 3.0),
    ('\u{1094}', 4.0), ('\u{1095}', 5.0), ('\u{1096}', 6.0), ('\u{1097}', 7.0),
    ('\u{1098}', 8.0), ('\u{1099}', 9.0), ('\u{1369}', 1.0), ('\u{136a}', 2.0),
    ('\u{136b}', 3.0), ('\u{136c}', 4.0), ('\u{136d}', 5.0), ('\u{136e}', 6.0),
    ('\u{136f}', 7.0), ('\u{1370}', 8.0), ('\u{1371}', 9.0), ('\u{1372}', 10.0),
    ('\u{1373}', 20.0), ('\u{1374}', 30.0), ('\u{1375}', 40.0), ('\u{1376}', 50.0),
    ('\u{1377}', 60.0), ('\u{1378}', 70.0), ('\u{1379}', 80.0), ('\u{137a}', 90.0),
    ('\u{137b}', 100.0), ('\u{137c}', 10000.0), ('\u{16ee}', 17.0), ('\u{16ef}', 18.0),
    ('\u{16f0}', 19.0), ('\u{17e0}', 0.0), ('\u{17e1}', 1.0), ('\u{17e2}', 2.0),
    ('\u{17e3}', 3.0), ('\u{17e4}', 4.0), ('\u{17e5}', 5.0), ('\u{17e6}', 6.0),
    ('\u{17e7}', 7.0), ('\u{17e8}', 8.0), ('\u{17e9}', 9.0), ('\u{17f0}', 0.0),
    ('\u{17f1}', 1.0), ('\u{17f2}', 2.0), ('\u{17f3}', 3.0), ('\u{17f4}', 4.0),
    ('\u{17f5}', 5.0), ('\u{17f6}', 6.0), ('\u{17f7}', 7.0), ('\u{17f8}', 8.0),
    ('\u{17f9}', 9.0), ('\u{1810}', 0.0), ('\u{1811}', 1.0), ('\u{1812}', 2.0),
    ('\u{1813}', 3.0), ('\u{1814}', 4.0), ('\u{1815}', 5.0), ('\u{1816}', 6.0),
    ('\u{1817}', 7.0), ('\u{1818}', 8.0), ('\u{1819}', 9.0), ('\u{1946}', 0.0),
    ('\u{1947}', 1.0), ('\u{1948}', 2.0), ('\u{1949}', 3.0), ('\u{194a}', 4.0),
    ('\u{194b}', 5.0), ('\u{194c}', 6.0), ('\u{194d}', 7.0), ('\u{194e}', 8.0),
    ('\u{194f}', 9.0), ('\u{19d0}', 0.0), ('\u{19d1}', 1.0), ('\u{19d2}', 2.0),
    ('\u{19d3}', 3.0), ('\u{19d4}', 4.0), ('\u{19d5}', 5.0), ('\u{19d6}', 6.0),
    ('\u{19d7}', 7.0), ('\u{19d8}', 8.0), ('\u{19d9}', 9.0), ('\u{19da}', 1.0),
    ('\u{1a80}', 0.0), ('\u{1a81}', 1.0), ('\u{1a82}', 2.0), ('\u{1a83}', 3.0),
    ('\u{1a84}', 4.0), ('\u{1a85}', 5.0), ('\u{1a86}', 6.0), ('\u{1a87}', 7.0),
    ('\u{1a88}', 8.0), ('\u{1a89}', 9.0), ('\u{1a90}', 0.0), ('\u{1a91}', 1.0),
    ('\u{1a92}', 2.0), ('\u{1a93}', 3.0), ('\u{1a94}', 4.0), ('\u{1a95}', 5.0),
    ('\u{1a96}', 6.0), ('\u{1a97}', 7.0), ('\u{1a98}', 8.0), ('\u{1a99}', 9.0),
    ('\u{1b50}', 0.0), ('\u{1b51}', 1.0), ('\u{1b52}', 2.0), ('\u{1b53}', 3.0),
    ('\u{1b54}', 4.0), ('\u{1b55}', 5.0), ('\u{1b56}', 6.0), ('\u{1b57}', 7.0),
    ('\u{1b58}', 8.0), ('\u{1b59}', 9.0), ('\u{1bb0}', 0.0), ('\u{1bb1}', 1.0),
    ('\u{1bb2}', 2.0), ('\u{1bb3}', 3.0), ('\u{1bb4}', 4.0), ('\u{1bb5}', 5.0),
    ('\u{1bb6}', 6.0), ('\u{1bb7}', 7.0), ('\u{1bb8}', 8.0), ('\u{1bb9}', 9.0),
    ('\u{1c40}', 0.0), ('\u{1c41}', 1.0), ('\u{1c42}', 2.0), ('\u{1c43}', 3.0),
    ('\u{1c44}', 4.0), ('\u{1c45}', 5.0), ('\u{1c46}', 6.0), ('\u{1c47}', 7.0),
    ('\u{1c48}', 8.0), ('\u{1c49}', 9.0), ('\u{1c50}', 0.0), ('\u{1c51}', 1.0),
    ('\u{1c52}', 2.0), ('\u{1c53}', 3.0), ('\u{1c54}', 4.0), ('\u{1c55}', 5.0),
    ('\u{1c56}', 6.0), ('\u{1c57}', 7.0), ('\u{1c58}', 8.0), ('\u{1c59}', 9.0),
    ('\u{2070}', 0.0), ('\u{2074}', 4.0), ('\u{2075}', 5.0), ('\u{2076}', 6.0),
    ('\u{2077}', 7.0), ('\u{2078}', 8.0), ('\u{2079}', 9.0), ('\u{2080}', 0.0),
    ('\u{2081}', 1.0), ('\u{2082}', 2.0), ('\u{2083}', 3.0), ('\u{2084}', 4.0),
    ('\u{2085}', 5.0), ('\u{2086}', 6.0), ('\u{2087}', 7.0), ('\u{2088}', 8.0),
    ('\u{2089}', 9.0), ('\u{2150}', 0.14285714285714285), ('\u{2151}', 0.1111111111111111), ('\u{2152}', 0.1),
    ('\u{2153}', 0.3333333333333333), ('\u{2154}', 0.6666666666666666), ('\u{2155}', 0.2), ('\u{2156}', 0.4),
    ('\u{2157}', 0.6), ('\u{2158}', 0.8), ('\u{2159}', 0.16666666666666666), ('\u{215a}', 0.8333333333333334),
    ('\u{215b}', 0.125), ('\u{215c}', 0.375), ('\u{215d}', 0.625), ('\u{215e}', 0.875),
    ('\u{215f}', 1.0), ('\u{2160}', 1.0), ('\u{2161}', 2.0), ('\u{2162}', 3.0),
    ('\u{2163}', 4.0), ('\u{2164}', 5.0), ('\u{2165}', 6.0), ('\u{2166}', 7.0),
    ('\u{2167}', 8.0), ('\u{2168}', 9.0), ('\u{2169}', 10.0), ('\u{216a}', 11.0),
    ('\u{216b}', 12.0), ('\u{216c}', 50.0), ('\u{216d}', 100.0), ('\u{216e}', 500.0),
    ('\u{216f}', 1000.0), ('\u{2170}', 1.0), ('\u{2171}', 2.0), ('\u{2172}', 3.0),
    ('\u{2173}', 4.0), ('\u{2174}', 5.0), ('\u{2175}', 6.0), ('\u{2176}', 7.0),
    ('\u{2177}', 8.0), ('\u{2178}', 9.0), ('\u{2179}', 10.0), ('\u{217a}', 11.0),
    ('\u{217b}', 12.0), ('\u{217c}', 50.0), ('\u{217d}', 100.0), ('\u{217e}', 500.0),
    ('\u{217f}', 1000.0), ('\u{2180}', 1000.0), ('\u{2181}', 5000.0), ('\u{2182}', 10000.0),
    ('\u{2185}', 6.0), ('\u{2186}', 50.0), ('\u{2187}', 50000.0), ('\u{2188}', 100000.0),
    ('\u{2189}', 0.0), ('\u{2460}', 1.0), ('\u{2461}', 2.0), ('\u{2462}', 3.0),
    ('\u{2463}', 4.0), ('\u{2464}', 5.0), ('\u{2465}', 6.0), ('\u{2466}', 7.0),
    ('\u{2467}', 8.0), ('\u{2468}', 9.0), ('\u{2469}', 10.0), ('\u{246a}', 11.0),
    ('\u{246b}', 12.0), ('\u{246c}', 13.0), ('\u{246d}', 14.0), ('\u{246e}', 15.0),
    ('\u{246f}', 16.0), ('\u{2470}', 17.0), ('\u{2471}', 18.0), ('\u{2472}', 19.0),
    ('\u{2473}', 20.0), ('\u{2474}', 1.0), ('\u{2475}', 2.0), ('\u{2476}', 3.0),
    ('\u{2477}', 4.0), ('\u{2478}', 5.0), ('\u{2479}', 6.0), ('\u{247a}', 7.0),
    ('\u{247b}', 8.0), ('\u{247c}', 9.0), ('\u{247d}', 10.0), ('\u{247e}', 11.0),
    ('\u{247f}', 12.0), ('\u{2480}', 13.0), ('\u{2481}', 14.0), ('\u{2482}', 15.0),
    ('\u{2483}', 16.0), ('\u{2484}', 17.0), ('\u{2485}', 18.0), ('\u{2486}', 19.0),
    ('\u{2487}', 20.0), ('\u{2488}', 1.0), ('\u{2489}', 2.0), ('\u{248a}', 3.0),
    ('\u{248b}', 4.0), ('\u{248c}', 5.0), ('\u{248d}', 6.0), ('\u{248e}', 7.0),
    ('\u{248f}', 8.0), ('\u{2490}', 9.0), ('\u{2491}', 10.0), ('\u{2492}', 11.0),
    ('\u{2493}', 12.0), ('\u{2494}', 13.0), ('\u{2495}', 14.0), ('\u{2496}', 15.0),
    ('\u{2497}', 16.0), ('\u{2498}', 17.0), ('\u{2499}', 18.0), ('\u{249a}', 19.0),
    ('\u{249b}', 20.0), ('\u{24ea}', 0.0), ('\u{24eb}', 11.0), ('\u{24ec}', 12.0),
    ('\u{24ed}', 13.0), ('\u{24ee}', 14.0), ('\u{24ef}', 15.0), ('\u{24f0}', 16.0),
    ('\u{24f1}', 17.0), ('\u{24f2}', 18.0), ('\u{24f3}', 19.0), ('\u{24f4}', 20.0),
    ('\u{24f5}', 1.0), ('\u{24f6}', 2.0), ('\u{24f7}', 3.0), ('\u{24f8}', 4.0),
    ('\u{24f9}', 5.0), ('\u{24fa}', 6.0), ('\u{24fb}', 7.0), ('\u{24fc}', 8.0),
    ('\u{24fd}', 9.0), ('\u{24fe}', 10.0), ('\u{24ff}', 0.0), ('\u{2776}', 1.0),
    ('\u{2777}', 2.0), ('\u{2778}', 3.0), ('\u{2779}', 4.0), ('\u{277a}', 5.0),
    ('\u{277b}', 6.0), ('\u{277c}', 7.0), ('\u{277d}', 8.0), ('\u{277e}', 9.0),
    ('\u{277f}', 10.0), ('\u{2780}', 1.0), ('\u{2781}', 2.0), ('\u{2782}', 3.0),
    ('\u{2783}', 4.0), ('\u{2784}', 5.0), ('\u{2785}', 6.0), ('\u{2786}', 7.0),
    ('\u{2787}', 8.0), ('\u{2788}', 9.0), ('\u{2789}', 10.0), ('\u{278a}', 1.0),
    ('\u{278b}', 2.0), ('\u{278c}', 3.0), ('\u{278d}', 4.0), ('\u{278e}', 5.0),
    ('\u{278f}', 6.0), ('\u{2790}', 7.0), ('\u{2791}', 8.0), ('\u{2792}', 9.0),
    ('\u{2793}', 10.0), ('\u{2cfd}', 0.5), ('\u{3007}', 0.0), ('\u{3021}', 1.0),
    ('\u{3022}', 2.0), ('\u{3023}', 3.0), ('\u{3024}', 4.0), ('\u{3025}', 5.0),
    ('\u{3026}', 6.0), ('\u{3027}', 7.0), ('\u{3028}', 8.0), ('\u{3029}', 9.0),
    ('\u{3038}', 10.0), ('\u{3039}', 20.0), ('\u{303a}', 30.0), ('\u{3192}', 1.0),
    ('\u{3193}', 2.0), ('\u{3194}', 3.0), ('\u{3195}', 4.0), ('\u{3220}', 1.0),
    ('\u{3221}', 2.0), ('\u{3222}', 3.0), ('\u{3223}', 4.0), ('\u{3224}', 5.0),
    ('\u{3225}', 6.0), ('\u{3226}', 7.0), ('\u{3227}', 8.0), ('\u{3228}', 9.0),
    ('\u{3229}', 10.0), ('\u{3248}', 10.0), ('\u{3249}', 20.0), ('\u{324a}', 30.0),
    ('\u{324b}', 40.0), ('\u{324c}', 50.0), ('\u{324d}', 60.0), ('\u{324e}', 70.0),
    ('\u{324f}', 80.0), ('\u{3251}', 21.0), ('\u{3252}', 22.0), ('\u{3253}', 23.0),
    ('\u{3254}', 24.0), ('\u{3255}', 25.0), ('\u{3256}', 26.0), ('\u{3257}', 27.0),
    ('\u{3258}', 28.0), ('\u{3259}', 29.0), ('\u{325a}', 30.0), ('\u{325b}', 31.0),
    ('\u{325c}', 32.0), ('\u{325d}', 33.0), ('\u{325e}', 34.0), ('\u{325f}', 35.0),
    ('\u{3280}', 1.0), ('\u{3281}', 2.0), ('\u{3282}', 3.0), ('\u{3283}', 4.0),
    ('\u{3284}', 5.0), ('\u{3285}', 6.0), ('\u{3286}', 7.0), ('\u{3287}', 8.0),
    ('\u{3288}', 9.0), ('\u{3289}', 10.0), ('\u{32b1}', 36.0), ('\u{32b2}', 37.0),
    ('\u{32b3}', 38.0), ('\u{32b4}', 39.0), ('\u{32b5}', 40.0), ('\u{32b6}', 41.0),
    ('\u{32b7}', 42.0), ('\u{32b8}', 43.0), ('\u{32b9}', 44.0), ('\u{32ba}', 45.0),
    ('\u{32bb}', 46.0), ('\u{32bc}', 47.0), ('\u{32bd}', 48.0), ('\u{32be}', 49.0),
    ('\u{32bf}', 50.0), ('\u{3405}', 5.0), ('\u{3483}', 2.0), ('\u{382a}', 5.0),
    ('\u{3b4d}', 7.0), ('\u{4e00}', 1.0), ('\u{4e03}', 7.0), ('\u{4e07}', 10000.0),
    ('\u{4e09}', 3.0), ('\u{4e5d}', 9.0), ('\u{4e8c}', 2.0), ('\u{4e94}', 5.0),
    ('\u{4e96}', 4.0), ('\u{4ebf}', 100000000.0), ('\u{4ec0}', 10.0), ('\u{4edf}', 1000.0),
    ('\u{4ee8}', 3.0), ('\u{4f0d}', 5.0), ('\u{4f70}', 100.0), ('\u{5104}', 100000000.0),
    ('\u{5146}', 1000000000000.0), ('\u{5169}', 2.0), ('\u{516b}', 8.0), ('\u{516d}', 6.0),
    ('\u{5341}', 10.0), ('\u{5343}', 1000.0), ('\u{5344}', 20.0), ('\u{5345}', 30.0),
    ('\u{534c}', 40.0), ('\u{53c1}', 3.0), ('\u{53c2}', 3.0), ('\u{53c3}', 3.0),
    ('\u{53c4}', 3.0), ('\u{56db}', 4.0), ('\u{58f1}', 1.0), ('\u{58f9}', 1.0),
    ('\u{5e7a}', 1.0), ('\u{5efe}', 9.0), ('\u{5eff}', 20.0), ('\u{5f0c}', 1.0),
    ('\u{5f0d}', 2.0), ('\u{5f0e}', 3.0), ('\u{5f10}', 2.0), ('\u{62fe}', 10.0),
    ('\u{634c}', 8.0), ('\u{67d2}', 7.0), ('\u{6f06}', 7.0), ('\u{7396}', 9.0),
    ('\u{767e}', 100.0), ('\u{8086}', 4.0), ('\u{842c}', 10000.0), ('\u{8cae}', 2.0),
    ('\u{8cb3}', 2.0), ('\u{8d30}', 2.0), ('\u{9621}', 1000.0), ('\u{9646}', 6.0),
    ('\u{964c}', 100.0), ('\u{9678}', 6.0), ('\u{96f6}', 0.0), ('\u{a620}', 0.0),
    ('\u{a621}', 1.0), ('\u{a622}', 2.0), ('\u{a623}', 3.0), ('\u{a624}', 4.0),
    ('\u{a625}', 5.0), ('\u{a626}', 6.0), ('\u{a627}', 7.0), ('\u{a628}', 8.0),
    ('\u{a629}', 9.0), ('\u{a6e6}', 1.0), ('\u{a6e7}', 2.0), ('\u{a6e8}', 3.0),
    ('\u{a6e9}', 4.0), ('\u{a6ea}', 5.0), ('\u{a6eb}', 6.0), ('\u{a6ec}', 7.0),
    ('\u{a6ed}', 8.0), ('\u{a6ee}', 9.0), ('\u{a6ef}', 0.0), ('\u{a830}', 0.25),
    ('\u{a831}', 0.5), ('\u{a832}', 0.75), ('\u{a833}', 0.0625), ('\u{a834}', 0.125),
    ('\u{a835}', 0.1875), ('\u{a8d0}', 0.0), ('\u{a8d1}', 1.0), ('\u{a8d2}', 2.0),
    ('\u{a8d3}', 3.0), ('\u{a8d4}', 4.0), ('\u{a8d5}', 5.0), ('\u{a8d6}', 6.0),
    ('\u{a8d7}', 7.0), ('\u{a8d8}', 8.0), ('\u{a8d9}', 9.0), ('\u{a900}', 0.0),
    ('\u{a901}', 1.0), ('\u{a902}', 2.0), ('\u{a903}', 3.0), ('\u{a904}', 4.0),
    ('\u{a905}', 5.0), ('\u{a906}', 6.0), ('\u{a907}', 7.0), ('\u{a908}', 8.0),
    ('\u{a909}', 9.0), ('\u{a9d0}', 0.0), ('\u{a9d1}', 1.0), ('\u{a9d2}', 2.0),
    ('\u{a9d3}', 3.0), ('\u{a9d4}', 4.0), ('\u{a9d5}', 5.0), ('\u{a9d6}', 6.0),
    ('\u{a9d7}', 7.0), ('\u{a9d8}', 8.0), ('\u{a9d9}', 9.0), ('\u{a9f0}', 0.0),
    ('\u{a9f1}', 1.0), ('\u{a9f2}', 2.0), ('\u{a9f3}', 3.0), ('\u{a9f4}', 4.0),
    ('\u{a9f5}', 5.0), ('\u{a9f6}', 6.0), ('\u{a9f7}', 7.0), ('\u{a9f8}', 8.0),
    ('\u{a9f9}', 9.0), ('\u{aa50}', 0.0), ('\u{aa51}', 1.0), ('\u{aa52}', 2.0),
    ('\u{aa53}', 3.0), ('\u{aa54}', 4.0), ('\u{aa55}', 5.0), ('\u{aa56}', 6.0),
    ('\u{aa57}', 7.0), ('\u{aa58}', 8.0), ('\u{aa59}', 9.0), ('\u{abf0}', 0.0),
    ('\u{abf1}', 1.0), ('\u{abf2}', 2.0), ('\u{abf3}', 3.0), ('\u{abf4}', 4.0),
    ('\u{abf5}', 5.0), ('\u{abf6}', 6.0), ('\u{abf7}', 7.0), ('\u{abf8}', 8.0),
    ('\u{abf9}', 9.0), ('\u{f96b}', 3.0), ('\u{f973}', 10.0), ('\u{f978}', 2.0),
    ('\u{f9b2}', 0.0), ('\u{f9d1}', 6.0), ('\u{f9d3}', 6.0), ('\u{f9fd}', 10.0),
    ('\u{ff10}', 0.0), ('\u{ff11}', 1.0), ('\u{ff12}', 2.0), ('\u{ff13}', 3.0),
    ('\u{ff14}', 4.0), ('\u{ff15}', 5.0), ('\u{ff16}', 6.0), ('\u{ff17}', 7.0),
    ('\u{ff18}', 8.0), ('\u{ff19}', 9.0), ('\u{10107}', 1.0), ('\u{10108}', 2.0),
    ('\u{10109}', 3.0), ('\u{1010a}', 4.0), ('\u{1010b}', 5.0), ('\u{1010c}', 6.0),
    ('\u{1010d}', 7.0), ('\u{1010e}', 8.0), ('\u{1010f}', 9.0), ('\u{10110}', 10.0),
    ('\u{10111}', 20.0), ('\u{10112}', 30.0), ('\u{10113}', 40.0), ('\u{10114}', 50.0),
    ('\u{10115}', 60.0), ('\u{10116}', 70.0), ('\u{10117}', 80.0), ('\u{10118}', 90.0),
    ('\u{10119}', 100.0), ('\u{1011a}', 200.0), ('\u{1011b}', 300.0), ('\u{1011c}', 400.0),
    ('\u{1011d}', 500.0), ('\u{1011e}', 600.0), ('\u{1011f}', 700.0), ('\u{10120}', 800.0),
    ('\u{10121}', 900.0), ('\u{10122}', 1000.0), ('\u{10123}', 2000.0), ('\u{10124}', 3000.0),
    ('\u{10125}', 4000.0), ('\u{10126}', 5000.0), ('\u{10127}', 6000.0), ('\u{10128}', 7000.0),
    ('\u{10129}', 8000.0), ('\u{1012a}', 9000.0), ('\u{1012b}', 10000.0), ('\u{1012c}', 20000.0),
    ('\u{1012d}', 30000.0), ('\u{1012e}', 40000.0), ('\u{1012f}', 50000.0), ('\u{10130}', 60000.0),
    ('\u{10131}', 70000.0), ('\u{10132}', 80000.0), ('\u{10133}', 90000.0), ('\u{10140}', 0.25),
    ('\u{10141}', 0.5), ('\u{10142}', 1.0), ('\u{10143}', 5.0), ('\u{10144}', 50.0),
    ('\u{10145}', 500.0), ('\u{10146}', 5000.0), ('\u{10147}', 50000.0), ('\u{10148}', 5.0),
    ('\u{10149}', 10.0), ('\u{1014a}', 50.0), ('\u{1014b}', 100.0), ('\u{1014c}', 500.0),
    ('\u{1014d}', 1000.0), ('\u{1014e}', 5000.0), ('\u{1014f}', 5.0), ('\u{10150}', 10.0),
    ('\u{10151}', 50.0), ('\u{10152}', 100.0), ('\u{10153}', 500.0), ('\u{10154}', 1000.0),
    ('\u{10155}', 10000.0), ('\u{10156}', 50000.0), ('\u{10157}', 10.0), ('\u{10158}', 1.0),
    ('\u{10159}', 1.0), ('\u{1015a}', 1.0), ('\u{1015b}', 2.0), ('\u{1015c}', 2.0),
    ('\u{1015d}', 2.0), ('\u{1015e}', 2.0), ('\u{1015f}', 5.0), ('\u{10160}', 10.0),
    ('\u{10161}', 10.0), ('\u{10162}', 10.0), ('\u{10163}', 10.0), ('\u{10164}', 10.0),
    ('\u{10165}', 30.0), ('\u{10166}', 50.0), ('\u{10167}', 50.0), ('\u{10168}', 50.0),
    ('\u{10169}', 50.0), ('\u{1016a}', 100.0), ('\u{1016b}', 300.0), ('\u{1016c}', 500.0),
    ('\u{1016d}', 500.0), ('\u{1016e}', 500.0), ('\u{1016f}', 500.0), ('\u{10170}', 500.0),
    ('\u{10171}', 1000.0), ('\u{10172}', 5000.0), ('\u{10173}', 5.0), ('\u{10174}', 50.0),
    ('\u{10175}', 0.5), ('\u{10176}', 0.5), ('\u{10177}', 0.6666666666666666), ('\u{10178}', 0.75),
    ('\u{1018a}', 0.0), ('\u{1018b}', 0.25), ('\u{102e1}', 1.0), ('\u{102e2}', 2.0),
    ('\u{102e3}', 3.0), ('\u{102e4}', 4.0), ('\u{102e5}', 5.0), ('\u{102e6}', 6.0),
    ('\u{102e7}', 7.0), ('\u{102e8}', 8.0), ('\u{102e9}', 9.0), ('\u{102ea}', 10.0),
    ('\u{102eb}', 20.0), ('\u{102ec}', 30.0), ('\u{102ed}', 40.0), ('\u{102ee}', 50.0),
    ('\u{102ef}', 60.0), ('\u{102f0}', 70.0), ('\u{102f1}', 80.0), ('\u{102f2}', 90.0),
    ('\u{102f3}', 100.0), ('\u{102f4}', 200.0), ('\u{102f5}', 300.0), ('\u{102f6}', 400.0),
    ('\u{102f7}', 500.0), ('\u{102f8}', 600.0), ('\u{102f9}', 700.0), ('\u{102fa}', 800.0),
    ('\u{102fb}', 900.0), ('\u{10320}', 1.0), ('\u{10321}', 5.0), ('\u{10322}', 10.0),
    ('\u{10323}', 50.0), ('\u{10341}', 90.0), ('\u{1034a}', 900.0), ('\u{103d1}', 1.0),
    ('\u{103d2}', 2.0), ('\u{103d3}', 10.0), ('\u{103d4}', 20.0), ('\u{103d5}', 100.0),
    ('\u{104a0}', 0.0), ('\u{104a1}', 1.0), ('\u{104a2}', 2.0), ('\u{104a3}', 3.0),
    ('\u{104a4}', 4.0), ('\u{104a5}', 5.0), ('\u{104a6}', 6.0), ('\u{104a7}', 7.0),
    ('\u{104a8}', 8.0), ('\u{104a9}', 9.0), ('\u{10858}', 1.0), ('\u{10859}', 2.0),
    ('\u{1085a}', 3.0), ('\u{1085b}', 10.0), ('\u{1085c}', 20.0), ('\u{1085d}', 100.0),
    ('\u{1085e}', 1000.0), ('\u{1085f}', 10000.0), ('\u{10879}', 1.0), ('\u{1087a}', 2.0),
    ('\u{1087b}', 3.0), ('\u{1087c}', 4.0), ('\u{1087d}', 5.0), ('\u{1087e}', 10.0),
    ('\u{1087f}', 20.0), ('\u{108a7}', 1.0), ('\u{108a8}', 2.0), ('\u{108a9}', 3.0),
    ('\u{108aa}', 4.0), ('\u{108ab}', 4.0), ('\u{108ac}', 5.0), ('\u{108ad}', 10.0),
    ('\u{108ae}', 20.0), ('\u{108af}', 100.0), ('\u{108fb}', 1.0), ('\u{108fc}', 5.0),
    ('\u{108fd}', 10.0), ('\u{108fe}', 20.0), ('\u{108ff}', 100.0), ('\u{10916}', 1.0),
    ('\u{10917}', 10.0), ('\u{10918}', 20.0), ('\u{10919}', 100.0), ('\u{1091a}', 2.0),
    ('\u{1091b}', 3.0), ('\u{109bc}', 0.9166666666666666), ('\u{109bd}', 0.5), ('\u{109c0}', 1.0),
    ('\u{109c1}', 2.0), ('\u{109c2}', 3.0), ('\u{109c3}', 4.0), ('\u{109c4}', 5.0),
    ('\u{109c5}', 6.0), ('\u{109c6}', 7.0), ('\u{109c7}', 8.0), ('\u{109c8}', 9.0),
    ('\u{109c9}', 10.0), ('\u{109ca}', 20.0), ('\u{109cb}', 30.0), ('\u{109cc}', 40.0),
    ('\u{109cd}', 50.0), ('\u{109ce}', 60.0), ('\u{109cf}', 70.0), ('\u{109d2}', 100.0),
    ('\u{109d3}', 200.0), ('\u{109d4}', 300.0), ('\u{109d5}', 400.0), ('\u{109d6}', 500.0),
    ('\u{109d7}', 600.0), ('\u{109d8}', 700.0), ('\u{109d9}', 800.0), ('\u{109da}', 900.0),
    ('\u{109db}', 1000.0), ('\u{109dc}', 2000.0), ('\u{109dd}', 3000.0), ('\u{109de}', 4000.0),
    ('\u{109df}', 5000.0), ('\u{109e0}', 6000.0), ('\u{109e1}', 7000.0), ('\u{109e2}', 8000.0),
    ('\u{109e3}', 9000.0), ('\u{109e4}', 10000.0), ('\u{109e5}', 20000.0), ('\u{109e6}', 30000.0),
    ('\u{109e7}', 40000.0), ('\u{109e8}', 50000.0), ('\u{109e9}', 60000.0), ('\u{109ea}', 70000.0),
    ('\u{109eb}', 80000.0), ('\u{109ec}', 90000.0), ('\u{109ed}', 100000.0), ('\u{109ee}', 200000.0),
    ('\u{109ef}', 300000.0), ('\u{109f0}', 400000.0), ('\u{109f1}', 500000.0), ('\u{109f2}', 600000.0),
    ('\u{109f3}', 700000.0), ('\u{109f4}', 800000.0), ('\u{109f5}', 900000.0), ('\u{109f6}', 0.08333333333333333),
    ('\u{109f7}', 0.16666666666666666), ('\u{109f8}', 0.25), ('\u{109f9}', 0.3333333333333333), ('\u{109fa}', 0.4166666666666667),
    ('\u{109fb}', 0.5), ('\u{109fc}', 0.5833333333333334), ('\u{109fd}', 0.6666666666666666), ('\u{109fe}', 0.75),
    ('\u{109ff}', 0.8333333333333334), ('\u{10a40}', 1.0), ('\u{10a41}', 2.0), ('\u{10a42}', 3.0),
    ('\u{10a43}', 4.0), ('\u{10a44}', 10.0), ('\u{10a45}', 20.0), ('\u{10a46}', 100.0),
    ('\u{10a47}', 1000.0), ('\u{10a48}', 0.5), ('\u{10a7d}', 1.0), ('\u{10a7e}', 50.0),
    ('\u{10a9d}', 1.0), ('\u{10a9e}', 10.0), ('\u{10a9f}', 20.0), ('\u{10aeb}', 1.0),
    ('\u{10aec}', 5.0), ('\u{10aed}', 10.0), ('\u{10aee}', 20.0), ('\u{10aef}', 100.0),
    ('\u{10b58}', 1.0), ('\u{10b59}', 2.0), ('\u{10b5a}', 3.0), ('\u{10b5b}', 4.0),
    ('\u{10b5c}', 10.0), ('\u{10b5d}', 20.0), ('\u{10b5e}', 100.0), ('\u{10b5f}', 1000.0),
    ('\u{10b78}', 1.0), ('\u{10b79}', 2.0), ('\u{10b7a}', 3.0), ('\u{10b7b}', 4.0),
    ('\u{10b7c}', 10.0), ('\u{10b7d}', 20.0), ('\u{10b7e}', 100.0), ('\u{10b7f}', 1000.0),
    ('\u{10ba9}', 1.0), ('\u{10baa}', 2.0), ('\u{10bab}', 3.0), ('\u{10bac}', 4.0),
    ('\u{10bad}', 10.0), ('\u{10bae}', 20.0), ('\u{10baf}', 100.0), ('\u{10cfa}', 1.0),
    ('\u{10cfb}', 5.0), ('\u{10cfc}', 10.0), ('\u{10cfd}', 50.0), ('\u{10cfe}', 100.0),
    ('\u{10cff}', 1000.0), ('\u{10d30}', 0.0), ('\u{10d31}', 1.0), ('\u{10d32}', 2.0),
    ('\u{10d33}', 3.0), ('\u{10d34}', 4.0), ('\u{10d35}', 5.0), ('\u{10d36}', 6.0),
    ('\u{10d37}', 7.0), ('\u{10d38}', 8.0), ('\u{10d39}', 9.0), ('\u{10e60}', 1.0),
    ('\u{10e61}', 2.0), ('\u{10e62}', 3.0), ('\u{10e63}', 4.0), ('\u{10e64}', 5.0),
    ('\u{10e65}', 6.0), ('\u{10e66}', 7.0), ('\u{10e67}', 8.0), ('\u{10e68}', 9.0),
    ('\u{10e69}', 10.0), ('\u{10e6a}', 20.0), ('\u{10e6b}', 30.0), ('\u{10e6c}', 40.0),
    ('\u{10e6d}', 50.0), ('\u{10e6e}', 60.0), ('\u{10e6f}', 70.0), ('\u{10e70}', 80.0),
    ('\u{10e71}', 90.0), ('\u{10e72}', 100.0), ('\u{10e73}', 200.0), ('\u{10e74}', 300.0),
    ('\u{10e75}', 400.0), ('\u{10e76}', 500.0), ('\u{10e77}', 600.0), ('\u{10e78}', 700.0),
    ('\u{10e79}', 800.0), ('\u{10e7a}', 900.0), ('\u{10e7b}', 0.5), ('\u{10e7c}', 0.25),
    ('\u{10e7d}', 0.3333333333333333), ('\u{10e7e}', 0.6666666666666666), ('\u{10f1d}', 1.0), ('\u{10f1e}', 2.0),
    ('\u{10f1f}', 3.0), ('\u{10f20}', 4.0), ('\u{10f21}', 5.0), ('\u{10f22}', 10.0),
    ('\u{10f23}', 20.0), ('\u{10f24}', 30.0), ('\u{10f25}', 100.0), ('\u{10f26}', 0.5),
    ('\u{10f51}', 1.0), ('\u{10f52}', 10.0), ('\u{10f53}', 20.0), ('\u{10f54}', 100.0),
    ('\u{10fc5}', 1.0), ('\u{10fc6}', 2.0), ('\u{10fc7}', 3.0), ('\u{10fc8}', 4.0),
    ('\u{10fc9}', 10.0), ('\u{10fca}', 20.0), ('\u{10fcb}', 100.0), ('\u{11052}', 1.0),
    ('\u{11053}', 2.0), ('\u{11054}', 3.0), ('\u{11055}', 4.0), ('\u{11056}', 5.0),
    ('\u{11057}', 6.0), ('\u{11058}', 7.0), ('\u{11059}', 8.0), ('\u{1105a}', 9.0),
    ('\u{1105b}', 10.0), ('\u{1105c}', 20.0), ('\u{1105d}', 30.0), ('\u{1105e}', 40.0),
    ('\u{1105f}', 50.0), ('\u{11060}', 60.0), ('\u{11061}', 70.0), ('\u{11062}', 80.0),
    ('\u{11063}', 90.0), ('\u{11064}', 100.0), ('\u{11065}', 1000.0), ('\u{11066}', 0.0),
    ('\u{11067}', 1.0), ('\u{11068}', 2.0), ('\u{11069}', 3.0), ('\u{1106a}', 4.0),
    ('\u{1106b}', 5.0), ('\u{1106c}', 6.0), ('\u{1106d}', 7.0), ('\u{1106e}', 8.0),
    ('\u{1106f}', 9.0), ('\u{110f0}', 0.0), ('\u{110f1}', 1.0), ('\u{110f2}', 2.0),
    ('\u{110f3}', 3.0), ('\u{110f4}', 4.0), ('\u{110f5}', 5.0), ('\u{110f6}', 6.0),
    ('\u{110f7}', 7.0), ('\u{110f8}', 8.0), ('\u{110f9}', 9.0), ('\u{11136}', 0.0),
    ('\u{11137}', 1.0), ('\u{11138}', 2.0), ('\u{11139}', 3.0), ('\u{1113a}', 4.0),
    ('\u{1113b}', 5.0), ('\u{1113c}', 6.0), ('\u{1113d}', 7.0), ('\u{1113e}', 8.0),
    ('\u{1113f}', 9.0), ('\u{111d0}', 0.0), ('\u{111d1}', 1.0), ('\u{111d2}', 2.0),
    ('\u{111d3}', 3.0), ('\u{111d4}', 4.0), ('\u{111d5}', 5.0), ('\u{111d6}', 6.0),
    ('\u{111d7}', 7.0), ('\u{111d8}', 8.0), ('\u{111d9}', 9.0), ('\u{111e1}', 1.0),
    ('\u{111e2}', 2.0), ('\u{111e3}', 3.0), ('\u{111e4}', 4.0), ('\u{111e5}', 5.0),
    ('\u{111e6}', 6.0), ('\u{111e7}', 7.0), ('\u{111e8}', 8.0), ('\u{111e9}', 9.0),
    ('\u{111ea}', 10.0), ('\u{111eb}', 20.0), ('\u{111ec}', 30.0), ('\u{111ed}', 40.0),
    ('\u{111ee}', 50.0), ('\u{111ef}', 60.0), ('\u{111f0}', 70.0), ('\u{111f1}', 80.0),
    ('\u{111f2}', 90.0), ('\u{111f3}', 100.0), ('\u{111f4}', 1000.0), ('\u{112f0}', 0.0),
    ('\u{112f1}', 1.0), ('\u{112f2}', 2.0), ('\u{112f3}', 3.0), ('\u{112f4}', 4.0),
    ('\u{112f5}', 5.0), ('\u{112f6}', 6.0), ('\u{112f7}', 7.0), ('\u{112f8}', 8.0),
    ('\u{112f9}', 9.0), ('\u{11450}', 0.0), ('\u{11451}', 1.0), ('\u{11452}', 2.0),
    ('\u{11453}', 3.0), ('\u{11454}', 4.0), ('\u{11455}', 5.0), ('\u{11456}', 6.0),
    ('\u{11457}', 7.0), ('\u{11458}', 8.0), ('\u{11459}', 9.0), ('\u{114d0}', 0.0),
    ('\u{114d1}', 1.0), ('\u{114d2}', 2.0), ('\u{114d3}', 3.0), ('\u{114d4}', 4.0),
    ('\u{114d5}', 5.0), ('\u{114d6}', 6.0), ('\u{114d7}', 7.0), ('\u{114d8}', 8.0),
    ('\u{114d9}', 9.0), ('\u{11650}', 0.0), ('\u{11651}', 1.0), ('\u{11652}', 2.0),
    ('\u{11653}', 3.0), ('\u{11654}', 4.0), ('\u{11655}', 5.0), ('\u{11656}', 6.0),
    ('\u{11657}', 7.0), ('\u{11658}', 8.0), ('\u{11659}', 9.0), ('\u{116c0}', 0.0),
    ('\u{116c1}', 1.0), ('\u{116c2}', 2.0), ('\u{116c3}', 3.0), ('\u{116c4}', 4.0),
    ('\u{116c5}', 5.0), ('\u{116c6}', 6.0), ('\u{116c7}', 7.0), ('\u{116c8}', 8.0),
    ('\u{116c9}', 9.0), ('\u{11730}', 0.0), ('\u{11731}', 1.0), ('\u{11732}', 2.0),
    ('\u{11733}', 3.0), ('\u{11734}', 4.0), ('\u{11735}', 5.0), ('\u{11736}', 6.0),
    ('\u{11737}', 7.0), ('\u{11738}', 8.0), ('\u{11739}', 9.0), ('\u{1173a}', 10.0),
    ('\u{1173b}', 20.0), ('\u{118e0}', 0.0), ('\u{118e1}', 1.0), ('\u{118e2}', 2.0),
    ('\u{118e3}', 3.0), ('\u{118e4}', 4.0), ('\u{118e5}', 5.0), ('\u{118e6}', 6.0),
    ('\u{118e7}', 7.0), ('\u{118e8}', 8.0), ('\u{118e9}', 9.0), ('\u{118ea}', 10.0),
    ('\u{118eb}', 20.0), ('\u{118ec}', 30.0), ('\u{118ed}', 40.0), ('\u{118ee}', 50.0),
    ('\u{118ef}', 60.0), ('\u{118f0}', 70.0), ('\u{118f1}', 80.0), ('\u{118f2}', 90.0),
    ('\u{11950}', 0.0), ('\u{11951}', 1.0), ('\u{11952}', 2.0), ('\u{11953}', 3.0),
    ('\u{11954}', 4.0), ('\u{11955}', 5.0), ('\u{11956}', 6.0), ('\u{11957}', 7.0),
    ('\u{11958}', 8.0), ('\u{11959}', 9.0), ('\u{11c50}', 0.0), ('\u{11c51}', 1.0),
    ('\u{11c52}', 2.0), ('\u{11c53}', 3.0), ('\u{11c54}', 4.0), ('\u{11c55}', 5.0),
    ('\u{11c56}', 6.0), ('\u{11c57}', 7.0), ('\u{11c58}', 8.0), ('\u{11c59}', 9.0),
    ('\u{11c5a}', 1.0), ('\u{11c5b}', 2.0), ('\u{11c5c}', 3.0), ('\u{11c5d}', 4.0),
    ('\u{11c5e}', 5.0), ('\u{11c5f}', 6.0), ('\u{11c60}', 7.0), ('\u{11c61}', 8.0),
    ('\u{11c62}', 9.0), ('\u{11c63}', 10.0), ('\u{11c64}', 20.0), ('\u{11c65}', 30.0),
    ('\u{11c66}', 40.0), ('\u{11c67}', 50.0), ('\u{11c68}', 60.0), ('\u{11c69}', 70.0),
    ('\u{11c6a}', 80.0), ('\u{11c6b}', 90.0), ('\u{11c6c}', 100.0), ('\u{11d50}', 0.0),
    ('\u{11d51}', 1.0), ('\u{11d52}', 2.0), ('\u{11d53}', 3.0), ('\u{11d54}', 4.0),
    ('\u{11d55}', 5.0), ('\u{11d56}', 6.0), ('\u{11d57}', 7.0), ('\u{11d58}', 8.0),
    ('\u{11d59}', 9.0), ('\u{11da0}', 0.0), ('\u{11da1}', 1.0), ('\u{11da2}', 2.0),
    ('\u{11da3}', 3.0), ('\u{11da4}', 4.0), ('\u{11da5}', 5.0), ('\u{11da6}', 6.0),
    ('\u{11da7}', 7.0), ('\u{11da8}', 8.0), ('\u{11da9}', 9.0), ('\u{11fc0}', 0.003125),
    ('\u{11fc1}', 0.00625), ('\u{11fc2}', 0.0125), ('\u{11fc3}', 0.015625), ('\u{11fc4}', 0.025),
    ('\u{11fc5}', 0.03125), ('\u{11fc6}', 0.0375), ('\u{11fc7}', 0.046875), ('\u{11fc8}', 0.05),
    ('\u{11fc9}', 0.0625), ('\u{11fca}', 0.0625), ('\u{11fcb}', 0.1), ('\u{11fcc}', 0.125),
    ('\u{11fcd}', 0.15), ('\u{11fce}', 0.1875), ('\u{11fcf}', 0.2), ('\u{11fd0}', 0.25),
    ('\u{11fd1}', 0.5), ('\u{11fd2}', 0.5), ('\u{11fd3}', 0.75), ('\u{11fd4}', 0.003125),
    ('\u{12400}', 2.0), ('\u{12401}', 3.0), ('\u{12402}', 4.0), ('\u{12403}', 5.0),
    ('\u{12404}', 6.0), ('\u{12405}', 7.0), ('\u{12406}', 8.0), ('\u{12407}', 9.0),
    ('\u{12408}', 3.0), ('\u{12409}', 4.0), ('\u{1240a}', 5.0), ('\u{1240b}', 6.0),
    ('\u{1240c}', 7.0), ('\u{1240d}', 8.0), ('\u{1240e}', 9.0), ('\u{1240f}', 4.0),
    ('\u{12410}', 5.0), ('\u{12411}', 6.0), ('\u{12412}', 7.0), ('\u{12413}', 8.0),
    ('\u{12414}', 9.0), ('\u{12415}', 1.0), ('\u{12416}', 2.0), ('\u{12417}', 3.0),
    ('\u{12418}', 4.0), ('\u{12419}', 5.0), ('\u{1241a}', 6.0), ('\u{1241b}', 7.0),
    ('\u{1241c}', 8.0), ('\u{1241d}', 9.0), ('\u{1241e}', 1.0), ('\u{1241f}', 2.0),
    ('\u{12420}', 3.0), ('\u{12421}', 4.0), ('\u{12422}', 5.0), ('\u{12423}', 2.0),
    ('\u{12424}', 3.0), ('\u{12425}', 3.0), ('\u{12426}', 4.0), ('\u{12427}', 5.0),
    ('\u{12428}', 6.0), ('\u{12429}', 7.0), ('\u{1242a}', 8.0), ('\u{1242b}', 9.0),
    ('\u{1242c}', 1.0), ('\u{1242d}', 2.0), ('\u{1242e}', 3.0), ('\u{1242f}', 3.0),
    ('\u{12430}', 4.0), ('\u{12431}', 5.0), ('\u{12432}', 216000.0), ('\u{12433}', 432000.0),
    ('\u{12434}', 1.0), ('\u{12435}', 2.0), ('\u{12436}', 3.0), ('\u{12437}', 3.0),
    ('\u{12438}', 4.0), ('\u{12439}', 5.0), ('\u{1243a}', 3.0), ('\u{1243b}', 3.0),
    ('\u{1243c}', 4.0), ('\u{1243d}', 4.0), ('\u{1243e}', 4.0), ('\u{1243f}', 4.0),
    ('\u{12440}', 6.0), ('\u{12441}', 7.0), ('\u{12442}', 7.0), ('\u{12443}', 7.0),
    ('\u{12444}', 8.0), ('\u{12445}', 8.0), ('\u{12446}', 9.0), ('\u{12447}', 9.0),
    ('\u{12448}', 9.0), ('\u{12449}', 9.0), ('\u{1244a}', 2.0), ('\u{1244b}', 3.0),
    ('\u{1244c}', 4.0), ('\u{1244d}', 5.0), ('\u{1244e}', 6.0), ('\u{1244f}', 1.0),
    ('\u{12450}', 2.0), ('\u{12451}', 3.0), ('\u{12452}', 4.0), ('\u{12453}', 4.0),
    ('\u{12454}', 5.0), ('\u{12455}', 5.0), ('\u{12456}', 2.0), ('\u{12457}', 3.0),
    ('\u{12458}', 1.0), ('\u{12459}', 2.0), ('\u{1245a}', 0.3333333333333333), ('\u{1245b}', 0.6666666666666666),
    ('\u{1245c}', 0.8333333333333334), ('\u{1245d}', 0.3333333333333333), ('\u{1245e}', 0.6666666666666666), ('\u{1245f}', 0.125),
    ('\u{12460}', 0.25), ('\u{12461}', 0.16666666666666666), ('\u{12462}', 0.25), ('\u{12463}', 0.25),
    ('\u{12464}', 0.5), ('\u{12465}', 0.3333333333333333), ('\u{12466}', 0.6666666666666666), ('\u{12467}', 40.0),
    ('\u{12468}', 50.0), ('\u{12469}', 4.0), ('\u{1246a}', 5.0), ('\u{1246b}', 6.0),
    ('\u{1246c}', 7.0), ('\u{1246d}', 8.0), ('\u{1246e}', 9.0), ('\u{16a60}', 0.0),
    ('\u{16a61}', 1.0), ('\u{16a62}', 2.0), ('\u{16a63}', 3.0), ('\u{16a64}', 4.0),
    ('\u{16a65}', 5.0), ('\u{16a66}', 6.0), ('\u{16a67}', 7.0), ('\u{16a68}', 8.0),
    ('\u{16a69}', 9.0), ('\u{16ac0}', 0.0), ('\u{16ac1}', 1.0), ('\u{16ac2}', 2.0),
    ('\u{16ac3}', 3.0), ('\u{16ac4}', 4.0), ('\u{16ac5}', 5.0), ('\u{16ac6}', 6.0),
    ('\u{16ac7}', 7.0), ('\u{16ac8}', 8.0), ('\u{16ac9}', 9.0), ('\u{16b50}', 0.0),
    ('\u{16b51}', 1.0), ('\u{16b52}', 2.0), ('\u{16b53}', 3.0), ('\u{16b54}', 4.0),
    ('\u{16b55}', 5.0), ('\u{16b56}', 6.0), ('\u{16b57}', 7.0), ('\u{16b58}', 8.0),
    ('\u{16b59}', 9.0), ('\u{16b5b}', 10.0), ('\u{16b5c}', 100.0), ('\u{16b5d}', 10000.0),
    ('\u{16b5e}', 1000000.0), ('\u{16b5f}', 100000000.0), ('\u{16b60}', 10000000000.0), ('\u{16b61}', 1000000000000.0),
    ('\u{16e80}', 0.0), ('\u{16e81}', 1.0), ('\u{16e82}', 2.0), ('\u{16e83}', 3.0),
    ('\u{16e84}', 4.0), ('\u{16e85}', 5.0), ('\u{16e86}', 6.0), ('\u{16e87}', 7.0),
    ('\u{16e88}', 8.0), ('\u{16e89}', 9.0), ('\u{16e8a}', 10.0), ('\u{16e8b}', 11.0),
    ('\u{16e8c}', 12.0), ('\u{16e8d}', 13.0), ('\u{16e8e}', 14.0), ('\u{16e8f}', 15.0),
    ('\u{16e90}', 16.0), ('\u{16e91}', 17.0), ('\u{16e92}', 18.0), ('\u{16e93}', 19.0),
    ('\u{16e94}', 1.0), ('\u{16e95}', 2.0), ('\u{16e96}', 3.0), ('\u{1d2e0}', 0.0),
    ('\u{1d2e1}', 1.0), ('\u{1d2e2}', 2.0), ('\u{1d2e3}', 3.0), ('\u{1d2e4}', 4.0),
    ('\u{1d2e5}', 5.0), ('\u{1d2e6}', 6.0), ('\u{1d2e7}', 7.0), ('\u{1d2e8}', 8.0),
    ('\u{1d2e9}', 9.0), ('\u{1d2ea}', 10.0), ('\u{1d2eb}', 11.0), ('\u{1d2ec}', 12.0),
    ('\u{1d2ed}', 13.0), ('\u{1d2ee}', 14.0), ('\u{1d2ef}', 15.0), ('\u{1d2f0}', 16.0),
    ('\u{1d2f1}', 17.0), ('\u{1d2f2}', 18.0), ('\u{1d2f3}', 19.0), ('\u{1d360}', 1.0),
    ('\u{1d361}', 2.0), ('\u{1d362}', 3.0), ('\u{1d363}', 4.0), ('\u{1d364}', 5.0),
    ('\u{1d365}', 6.0), ('\u{1d366}', 7.0), ('\u{1d367}', 8.0), ('\u{1d368}', 9.0),
    ('\u{1d369}', 10.0), ('\u{1d36a}', 20.0), ('\u{1d36b}', 30.0), ('\u{1d36c}', 40.0),
    ('\u{1d36d}', 50.0), ('\u{1d36e}', 60.0), ('\u{1d36f}', 70.0), ('\u{1d370}', 80.0),
    ('\u{1d371}', 90.0), ('\u{1d372}', 1.0), ('\u{1d373}', 2.0), ('\u{1d374}', 3.0),
    ('\u{1d375}', 4.0), ('\u{1d376}', 5.0), ('\u{1d377}', 1.0), ('\u{1d378}', 5.0),
    ('\u{1d7ce}', 0.0), ('\u{1d7cf}', 1.0), ('\u{1d7d0}', 2.0), ('\u{1d7d1}', 3.0),
    ('\u{1d7d2}', 4.0), ('\u{1d7d3}', 5.0), ('\u{1d7d4}', 6.0), ('\u{1d7d5}', 7.0),
    ('\u{1d7d6}', 8.0), ('\u{1d7d7}', 9.0), ('\u{1d7d8}', 0.0), ('\u{1d7d9}', 1.0),
    ('\u{1d7da}', 2.0), ('\u{1d7db}', 3.0), ('\u{1d7dc}', 4.0), ('\u{1d7dd}', 5.0),
    ('\u{1d7de}', 6.0), ('\u{1d7df}', 7.0), ('\u{1d7e0}', 8.0), ('\u{1d7e1}', 9.0),
    ('\u{1d7e2}', 0.0), ('\u{1d7e3}', 1.0), ('\u{1d7e4}', 2.0), ('\u{1d7e5}', 3.0),
    ('\u{1d7e6}', 4.0), ('\u{1d7e7}', 5.0), ('\u{1d7e8}', 6.0), ('\u{1d7e9}', 7.0),
    ('\u{1d7ea}', 8.0), ('\u{1d7eb}', 9.0), ('\u{1d7ec}', 0.0), ('\u{1d7ed}', 1.0),
    ('\u{1d7ee}', 2.0), ('\u{1d7ef}', 3.0), ('\u{1d7f0}', 4.0), ('\u{1d7f1}', 5.0),
    ('\u{1d7f2}', 6.0), ('\u{1d7f3}', 7.0), ('\u{1d7f4}', 8.0), ('\u{1d7f5}', 9.0),
    ('\u{1d7f6}', 0.0), ('\u{1d7f7}', 1.0), ('\u{1d7f8}', 2.0), ('\u{1d7f9}', 3.0),
    ('\u{1d7fa}', 4.0), ('\u{1d7fb}', 5.0), ('\u{1d7fc}', 6.0), ('\u{1d7fd}', 7.0),
    ('\u{1d7fe}', 8.0), ('\u{1d7ff}', 9.0), ('\u{1e140}', 0.0), ('\u{1e141}', 1.0),
    ('\u{1e142}', 2.0), ('\u{1e143}', 3.0), ('\u{1e144}', 4.0), ('\u{1e145}', 5.0),
    ('\u{1e146}', 6.0), ('\u{1e147}', 7.0), ('\u{1e148}', 8.0), ('\u{1e149}', 9.0),
    ('\u{1e2f0}', 0.0), ('\u{1e2f1}', 1.0), ('\u{1e2f2}', 2.0), ('\u{1e2f3}', 3.0),
    ('\u{1e2f4}', 4.0), ('\u{1e2f5}', 5.0), ('\u{1e2f6}', 6.0), ('\u{1e2f7}', 7.0),
    ('\u{1e2f8}', 8.0), ('\u{1e2f9}', 9.0), ('\u{1e8c7}', 1.0), ('\u{1e8c8}', 2.0),
    ('\u{1e8c9}', 3.0), ('\u{1e8ca}', 4.0), ('\u{1e8cb}', 5.0), ('\u{1e8cc}', 6.0),
    ('\u{1e8cd}', 7.0), ('\u{1e8ce}', 8.0), ('\u{1e8cf}', 9.0), ('\u{1e950}', 0.0),
    ('\u{1e951}', 1.0), ('\u{1e952}', 2.0), ('\u{1e953}', 3.0), ('\u{1e954}', 4.0),
    ('\u{1e955}', 5.0), ('\u{1e956}', 6.0), ('\u{1e957}', 7.0), ('\u{1e958}', 8.0),
    ('\u{1e959}', 9.0), ('\u{1ec71}', 1.0), ('\u{1ec72}', 2.0), ('\u{1ec73}', 3.0),
    ('\u{1ec74}', 4.0), ('\u{1ec75}', 5.0), ('\u{1ec76}', 6.0), ('\u{1ec77}', 7.0),
    ('\u{1ec78}', 8.0), ('\u{1ec79}', 9.0), ('\u{1ec7a}', 10.0), ('\u{1ec7b}', 20.0),
    ('\u{1ec7c}', 30.0), ('\u{1ec7d}', 40.0), ('\u{1ec7e}', 50.0), ('\u{1ec7f}', 60.0),
    ('\u{1ec80}', 70.0), ('\u{1ec81}', 80.0), ('\u{1ec82}', 90.0), ('\u{1ec83}', 100.0),
    ('\u{1ec84}', 200.0), ('\u{1ec85}', 300.0), ('\u{1ec86}', 400.0), ('\u{1ec87}', 500.0),
    ('\u{1ec88}', 600.0), ('\u{1ec89}', 700.0), ('\u{1ec8a}', 800.0), ('\u{1ec8b}', 900.0),
    ('\u{1ec8c}', 1000.0), ('\u{1ec8d}', 2000.0), ('\u{1ec8e}', 3000.0), ('\u{1ec8f}', 4000.0),
    ('\u{1ec90}', 5000.0), ('\u{1ec91}', 6000.0), ('\u{1ec92}', 7000.0), ('\u{1ec93}', 8000.0),
    ('\u{1ec94}', 9000.0), ('\u{1ec95}', 10000.0), ('\u{1ec96}', 20000.0), ('\u{1ec97}', 30000.0),
    ('\u{1ec98}', 40000.0), ('\u{1ec99}', 50000.0), ('\u{1ec9a}', 60000.0), ('\u{1ec9b}', 70000.0),
    ('\u{1ec9c}', 80000.0), ('\u{1ec9d}', 90000.0), ('\u{1ec9e}', 100000.0), ('\u{1ec9f}', 200000.0),
    ('\u{1eca0}', 100000.0), ('\u{1eca1}', 10000000.0), ('\u{1eca2}', 20000000.0), ('\u{1eca3}', 1.0),
    ('\u{1eca4}', 2.0), ('\u{1eca5}', 3.0), ('\u{1eca6}', 4.0), ('\u{1eca7}', 5.0),
    ('\u{1eca8}', 6.0), ('\u{1eca9}', 7.0), ('\u{1ecaa}', 8.0), ('\u{1ecab}', 9.0),
    ('\u{1ecad}', 0.25), ('\u{1ecae}', 0.5), ('\u{1ecaf}', 0.75), ('\u{1ecb1}', 1.0),
    ('\u{1ecb2}', 2.0), ('\u{1ecb3}', 10000.0), ('\u{1ecb4}', 100000.0), ('\u{1ed01}', 1.0),
    ('\u{1ed02}', 2.0), ('\u{1ed03}', 3.0), ('\u{1ed04}', 4.0), ('\u{1ed05}', 5.0),
    ('\u{1ed06}', 6.0), ('\u{1ed07}', 7.0), ('\u{1ed08}', 8.0), ('\u{1ed09}', 9.0),
    ('\u{1ed0a}', 10.0), ('\u{1ed0b}', 20.0), ('\u{1ed0c}', 30.0), ('\u{1ed0d}', 40.0),
    ('\u{1ed0e}', 50.0), ('\u{1ed0f}', 60.0), ('\u{1ed10}', 70.0), ('\u{1ed11}', 80.0),
    ('\u{1ed12}', 90.0), ('\u{1ed13}', 100.0), ('\u{1ed14}', 200.0), ('\u{1ed15}', 300.0),
    ('\u{1ed16}', 400.0), ('\u{1ed17}', 500.0), ('\u{1ed18}', 600.0), ('\u{1ed19}', 700.0),
    ('\u{1ed1a}', 800.0), ('\u{1ed1b}', 900.0), ('\u{1ed1c}', 1000.0), ('\u{1ed1d}', 2000.0),
    ('\u{1ed1e}', 3000.0), ('\u{1ed1f}', 4000.0), ('\u{1ed20}', 5000.0), ('\u{1ed21}', 6000.0),
    ('\u{1ed22}', 7000.0), ('\u{1ed23}', 8000.0), ('\u{1ed24}', 9000.0), ('\u{1ed25}', 10000.0),
    ('\u{1ed26}', 20000.0), ('\u{1ed27}', 30000.0), ('\u{1ed28}', 40000.0), ('\u{1ed29}', 50000.0),
    ('\u{1ed2a}', 60000.0), ('\u{1ed2b}', 70000.0), ('\u{1ed2c}', 80000.0), ('\u{1ed2d}', 90000.0),
    ('\u{1ed2f}', 2.0), ('\u{1ed30}', 3.0), ('\u{1ed31}', 4.0), ('\u{1ed32}', 5.0),
    ('\u{1ed33}', 6.0), ('\u{1ed34}', 7.0), ('\u{1ed35}', 8.0), ('\u{1ed36}', 9.0),
    ('\u{1ed37}', 10.0), ('\u{1ed38}', 400.0), ('\u{1ed39}', 600.0), ('\u{1ed3a}', 2000.0),
    ('\u{1ed3b}', 10000.0), ('\u{1ed3c}', 0.5), ('\u{1ed3d}', 0.16666666666666666), ('\u{1f100}', 0.0),
    ('\u{1f101}', 0.0), ('\u{1f102}', 1.0), ('\u{1f103}', 2.0), ('\u{1f104}', 3.0),
    ('\u{1f105}', 4.0), ('\u{1f106}', 5.0), ('\u{1f107}', 6.0), ('\u{1f108}', 7.0),
    ('\u{1f109}', 8.0), ('\u{1f10a}', 9.0), ('\u{1f10b}', 0.0), ('\u{1f10c}', 0.0),
    ('\u{1fbf0}', 0.0), ('\u{1fbf1}', 1.0), ('\u{1fbf2}', 2.0), ('\u{1fbf3}', 3.0),
    ('\u{1fbf4}', 4.0), ('\u{1fbf5}', 5.0), ('\u{1fbf6}', 6.0), ('\u{1fbf7}', 7.0),
    ('\u{1fbf8}', 8.0), ('\u{1fbf9}', 9.0), ('\u{20001}', 7.0), ('\u{20064}', 4.0),
    ('\u{200e2}', 4.0), ('\u{20121}', 5.0), ('\u{2092a}', 1.0), ('\u{20983}', 30.0),
    ('\u{2098c}', 40.0), ('\u{2099c}', 40.0), ('\u{20aea}', 6.0), ('\u{20afd}', 3.0),
    ('\u{20b19}', 3.0), ('\u{22390}', 2.0), ('\u{22998}', 3.0), ('\u{23b1b}', 3.0),
    ('\u{2626d}', 4.0), ('\u{2f890}', 9.0),
];

#[rustfmt::skip]
pub(super) static DIGITS: &[(char, u8)] = &[
    ('\u{b2}', 2), ('\u{b3}', 3), ('\u{b9}', 1), ('\u{660}', 0), ('\u{661}', 1), ('\u{662}', 2),
    ('\u{663}', 3), ('\u{664}', 4), ('\u{665}', 5), ('\u{666}', 6), ('\u{667}', 7), ('\u{668}', 8),
    ('\u{669}', 9), ('\u{6f0}', 0), ('\u{6f1}', 1), ('\u{6f2}', 2), ('\u{6f3}', 3), ('\u{6f4}', 4),
    ('\u{6f5}', 5), ('\u{6f6}', 6), ('\u{6f7}', 7), ('\u{6f8}', 8), ('\u{6f9}', 9), ('\u{7c0}', 0),
    ('\u{7c1}', 1), ('\u{7c2}', 2), ('\u{7c3}', 3), ('\u{7c4}', 4), ('\u{7c5}', 5), ('\u{7c6}', 6),
    ('\u{7c7}', 7), ('\u{7c8}', 8), ('\u{7c9}', 9), ('\u{966}', 0), ('\u{967}', 1), ('\u{968}', 2),
    ('\u{969}', 3), ('\u{96a}', 4), ('\u{96b}', 5), ('\u{96c}', 6), ('\u{96d}', 7), ('\u{96e}', 8),
    ('\u{96f}', 9), ('\u{9e6}', 0), ('\u{9e7}', 1), ('\u{9e8}', 2), ('\u{9e9}', 3), ('\u{9ea}', 4),
    ('\u{9eb}', 5), ('\u{9ec}', 6), ('\u{9ed}', 7), ('\u{9ee}', 8), ('\u{9ef}', 9), ('\u{a66}', 0),
    ('\u{a67}', 1), ('\u{a68}', 2), ('\u{a69}', 3), ('\u{a6a}', 4), ('\u{a6b}', 5), ('\u{a6c}', 6),
    ('\u{a6d}', 7), ('\u{a6e}', 8), ('\u{a6f}', 9), ('\u{ae6}', 0), ('\u{ae7}', 1), ('\u{ae8}', 2),
    ('\u{ae9}', 3), ('\u{aea}', 4), ('\u{aeb}', 5), ('\u{aec}', 6), ('\u{aed}', 7), ('\u{aee}', 8),
    ('\u{aef}', 9), ('\u{b66}', 0), ('\u{b67}', 1), ('\u{b68}', 2), ('\u{b69}', 3), ('\u{b6a}', 4),
    ('\u{b6b}', 5), ('\u{b6c}', 6), ('\u{b6d}', 7), ('\u{b6e}', 8), ('\u{b6f}', 9), ('\u{be6}', 0),
    ('\u{be7}', 1), ('\u{be8}', 2), ('\u{be9}', 3), ('\u{bea}', 4), ('\u{beb}', 5), ('\u{bec}', 6),
    ('\u{bed}', 7), ('\u{bee}', 8), ('\u{bef}', 9), ('\u{c66}', 0), ('\u{c67}', 1), ('\u{c68}', 2),
    ('\u{c69}', 3), ('\u{c6a}', 4), ('\u{c6b}', 5), ('\u{c6c}', 6), ('\u{c6d}', 7), ('\u{c6e}', 8),
    ('\u{c6f}', 9), ('\u{ce6}', 0), ('\u{ce7}', 1), ('\u{ce8}', 2), ('\u{ce9}', 3), ('\u{cea}', 4),
    ('\u{ceb}', 5), ('\u{cec}', 6), ('\u{ced}', 7), ('\u{cee}', 8), ('\u{cef}', 9), ('\u{d66}', 0),
    ('\u{d67}', 1), ('\u{d68}', 2), ('\u{d69}', 3), ('\u{d6a}', 4), ('\u{d6b}', 5), ('\u{d6c}', 6),
    ('\u{d6d}', 7), ('\u{d6e}', 8), ('\u{d6f}', 9), ('\u{de6}', 0), ('\u{de7}', 1), ('\u{de8}', 2),
    ('\u{de9}', 3), ('\u{dea}', 4), ('\u{deb}', 5), ('\u{dec}', 6), ('\u{ded}', 7), ('\u{dee}', 8),
    ('\u{def}', 9), ('\u{e50}', 0), ('\u{e51}', 1), ('\u{e52}', 2), ('\u{e53}', 3), ('\u{e54}', 4),
    ('\u{e55}', 5), ('\u{e56}', 6), ('\u{e57}', 7), ('\u{e58}', 8), ('\u{e59}', 9), ('\u{ed0}', 0),
    ('\u{ed1}', 1), ('\u{ed2}', 2), ('\u{ed3}', 3), ('\u{ed4}', 4), ('\u{ed5}', 5), ('\u{ed6}', 6),
    ('\u{ed7}', 7), ('\u{ed8}', 8), ('\u{ed9}', 9), ('\u{f20}', 0), ('\u{f21}', 1), ('\u{f22}', 2),
    ('\u{f23}', 3), ('\u{f24}', 4), ('\u{f25}', 5), ('\u{f26}', 6), ('\u{f27}', 7), ('\u{f28}', 8),
    ('\u{f29}', 9), ('\u{1040}', 0), ('\u{1041}', 1), ('\u{1042}', 2), ('\u{1043}', 3), ('\u{1044}', 4),
    ('\u{1045}', 5), ('\u{1046}', 6), ('\u{1047}', 7), ('\u{1048}', 8), ('\u{1049}', 9), ('\u{1090}', 0),
    ('\u{1091}', 1), ('\u{1092}', 2), ('\u{1093}', 3), ('\u{1094}', 4), ('\u{1095}', 5), ('\u{1096}', 6),
    ('\u{1097}', 7), ('\u{1098}', 8), ('\u{1099}', 9), ('\u{1369}', 1), ('\u{136a}', 2), ('\u{136b}', 3),
    ('\u{136c}', 4), ('\u{136d}', 5), ('\u{136e}', 6), ('\u{136f}', 7), ('\u{1370}', 8), ('\u{1371}', 9),
    ('\u{17e0}', 0), ('\u{17e1}', 1), ('\u{17e2}', 2), ('\u{17e3}', 3), ('\u{17e4}', 4), ('\u{17e5}', 5),
    ('\u{17e6}', 6), ('\u{17e7}', 7), ('\u{17e8}', 8), ('\u{17e9}', 9), ('\u{1810}', 0), ('\u{1811}', 1),
    ('\u{1812}', 2), ('\u{1813}', 3), ('\u{1814}', 4), ('\u{1815}', 5), ('\u{1816}', 6), ('\u{1817}', 7),
    ('\u{1818}', 8), ('\u{1819}', 9), ('\u{1946}', 0), ('\u{1947}', 1), ('\u{1948}', 2), ('\u{1949}', 3),
    ('\u{194a}', 4), ('\u{194b}', 5), ('\u{194c}', 6), ('\u{194d}', 7), ('\u{194e}', 8), ('\u{194f}', 9),
    ('\u{19d0}', 0), ('\u{19d1}', 1), ('\u{19d2}', 2), ('\u{19d3}', 3), ('\u{19d4}', 4), ('\u{19d5}', 5),
    ('\u{19d6}', 6), ('\u{19d7}', 7), ('\u{19d8}', 8), ('\u{19d9}', 9), ('\u{19da}', 1), ('\u{1a80}', 0),
    ('\u{1a81}', 1), ('\u{1a82}', 2), ('\u{1a83}', 3), ('\u{1a84}', 4), ('\u{1a85}', 5), ('\u{1a86}', 6),
    ('\u{1a87}', 7), ('\u{1a88}', 8), ('\u{1a89}', 9), ('\u{1a90}', 0), ('\u{1a91}', 1), ('\u{1a92}', 2),
    ('\u{1a93}', 3), ('\u{1a94}', 4), ('\u{1a95}', 5), ('\u{1a96}', 6), ('\u{1a97}', 7), ('\u{1a98}', 8),
    ('\u{1a99}', 9), ('\u{1b50}', 0), ('\u{1b51}', 1), ('\u{1b52}', 2), ('\u{1b53}', 3), ('\u{1b54}', 4),
    ('\u{1b55}', 5), ('\u{1b56}', 6), ('\u{1b57}', 7), ('\u{1b58}', 8), ('\u{1b59}', 9), ('\u{1bb0}', 0),
    ('\u{1bb1}', 1), ('\u{1bb2}', 2), ('\u{1bb3}', 3), ('\u{1bb4}', 4), ('\u{1bb5}', 5), ('\u{1bb6}', 6),
    ('\u{1bb7}', 7), ('\u{1bb8}', 8), ('\u{1bb9}', 9), ('\u{1c40}', 0), ('\u{1c41}', 1), ('\u{1c42}', 2),
    ('\u{1c43}', 3), ('\u{1c44}', 4), ('\u{1c45}', 5), ('\u{1c46}', 6), ('\u{1c47}', 7), ('\u{1c48}', 8),
    ('\u{1c49}', 9), ('\u{1c50}', 0), ('\u{1c51}', 1), ('\u{1c52}', 2), ('\u{1c53}', 3), ('\u{1c54}', 4),
    ('\u{1c55}', 5), ('\u{1c56}', 6), ('\u{1c57}', 7), ('\u{1c58}', 8), ('\u{1c59}', 9), ('\u{2070}', 0),
    ('\u{2074}', 4), ('\u{2075}', 5), ('\u{2076}', 6), ('\u{2077}', 7), ('\u{2078}', 8), ('\u{2079}', 9),
    ('\u{2080}', 0), ('\u{2081}', 1), ('\u{2082}', 2), ('\u{2083}', 3), ('\u{2084}', 4), ('\u{2085}', 5),
    ('\u{2086}', 6), ('\u{2087}', 7), ('\u{2088}', 8), ('\u{2089}', 9), ('\u{2460}', 1), ('\u{2461}', 2),
    ('\u{2462}', 3), ('\u{2463}', 4), ('\u{2464}', 5), ('\u{2465}', 6), ('\u{2466}', 7), ('\u{2467}', 8),
    ('\u{2468}', 9), ('\u{2474}', 1), ('\u{2475}', 2), ('\u{2476}', 3), ('\u{2477}', 4), ('\u{2478}', 5),
    ('\u{2479}', 6), ('\u{247a}', 7), ('\u{247b}', 8), ('\u{247c}', 9), ('\u{2488}', 1), ('\u{2489}', 2),
    ('\u{248a}', 3), ('\u{248b}', 4), ('\u{248c}', 5), ('\u{248d}', 6), ('\u{248e}', 7), ('\u{248f}', 8),
    ('\u{2490}', 9), ('\u{24ea}', 0), ('\u{24f5}', 1), ('\u{24f6}', 2), ('\u{24f7}', 3), ('\u{24f8}', 4),
    ('\u{24f9}', 5), ('\u{24fa}', 6), ('\u{24fb}', 7), ('\u{24fc}', 8), ('\u{24fd}', 9), ('\u{24ff}', 0),
    ('\u{2776}', 1), ('\u{2777}', 2), ('\u{2778}', 3), ('\u{2779}', 4), ('\u{277a}', 5), ('\u{277b}', 6),
    ('\u{277c}', 7), ('\u{277d}', 8), ('\u{277e}', 9), ('\u{2780}', 1), ('\u{2781}', 2), ('\u{2782}', 3),
    ('\u{2783}', 4), ('\u{2784}', 5), ('\u{2785}', 6), ('\u{2786}', 7), ('\u{2787}', 8), ('\u{2788}', 9),
    ('\u{278a}', 1), ('\u{278b}', 2), ('\u{278c}', 3), ('\u{278d}', 4), ('\u{278e}', 5), ('\u{278f}', 6),
    ('\u{2790}', 7), ('\u{2791}', 8), ('\u{2792}', 9), ('\u{a620}', 0), ('\u{a621}', 1), ('\u{a622}', 2),
    ('\u{a623}', 3), ('\u{a624}', 4), ('\u{a625}', 5), ('\u{a626}', 6), ('\u{a627}', 7), ('\u{a628}', 8),
    ('\u{a629}', 9), ('\u{a8d0}', 0), ('\u{a8d1}', 1), ('\u{a8d2}', 2), ('\u{a8d3}', 3), ('\u{a8d4}', 4),
    ('\u{a8d5}', 5), ('\u{a8d6}', 6), ('\u{a8d7}', 7), ('\u{a8d8}', 8), ('\u{a8d9}', 9), ('\u{a900}', 0),
    ('\u{a901}', 1), ('\u{a902}', 2), ('\u{a903}', 3), ('\u{a904}', 4), ('\u{a905}', 5), ('\u{a906}', 6),
    ('\u{a907}', 7), ('\u{a908}', 8), ('\u{a909}', 9), ('\u{a9d0}', 0), ('\u{a9d1}', 1), ('\u{a9d2}', 2),
    ('\u{a9d3}', 3), ('\u{a9d4}', 4), ('\u{a9d5}', 5), ('\u{a9d6}', 6), ('\u{a9d7}', 7), ('\u{a9d8}', 8),
    ('\u{a9d9}', 9), ('\u{a9f0}', 0), ('\u{a9f1}', 1), ('\u{a9f2}', 2), ('\u{a9f3}', 3), ('\u{a9f4}', 4),
    ('\u{a9f5}', 5), ('\u{a9f6}', 6), ('\u{a9f7}', 7), ('\u{a9f8}', 8), ('\u{a9f9}', 9), ('\u{aa50}', 0),
    ('\u{aa51}', 1), ('\u{aa52}', 2), ('\u{aa53}', 3), ('\u{aa54}', 4), ('\u{aa55}', 5), ('\u{aa56}', 6),
    ('\u{aa57}', 7), ('\u{aa58}', 8), ('\u{aa59}', 9), ('\u{abf0}', 0), ('\u{abf1}', 1), ('\u{abf2}', 2),
    ('\u{abf3}', 3), ('\u{abf4}', 4), ('\u{abf5}', 5), ('\u{abf6}', 6), ('\u{abf7}', 7), ('\u{abf8}', 8),
    ('\u{abf9}', 9), ('\u{ff10}', 0), ('\u{ff11}', 1), ('\u{ff12}', 2), ('\u{ff13}', 3), ('\u{ff14}', 4),
    ('\u{ff15}', 5), ('\u{ff16}', 6), ('\u{ff17}', 7), ('\u{ff18}', 8), ('\u{ff19}', 9), ('\u{104a0}', 0),
    ('\u{104a1}', 1), ('\u{104a2}', 2), ('\u{104a3}', 3), ('\u{104a4}', 4), ('\u{104a5}', 5), ('\u{104a6}', 6),
    ('\u{104a7}', 7), ('\u{104a8}', 8), ('\u{104a9}', 9), ('\u{10a40}', 1), ('\u{10a41}', 2), ('\u{10a42}', 3),
    ('\u{10a43}', 4), ('\u{10d30}', 0), ('\u{10d31}', 1), ('\u{10d32}', 2), ('\u{10d33}', 3), ('\u{10d34}', 4),
    ('\u{10d35}', 5), ('\u{10d36}', 6), ('\u{10d37}', 7), ('\u{10d38}', 8), ('\u{10d39}', 9), ('\u{10e60}', 1),
    ('\u{10e61}', 2), ('\u{10e62}', 3), ('\u{10e63}', 4), ('\u{10e64}', 5), ('\u{10e65}', 6), ('\u{10e66}', 7),
    ('\u{10e67}', 8), ('\u{10e68}', 9), ('\u{11052}', 1), ('\u{11053}', 2), ('\u{11054}', 3), ('\u{11055}', 4),
    ('\u{11056}', 5), ('\u{11057}', 6), ('\u{11058}', 7), ('\u{11059}', 8), ('\u{1105a}', 9), ('\u{11066}', 0),
    ('\u{11067}', 1), ('\u{11068}', 2), ('\u{11069}', 3), ('\u{1106a}', 4), ('\u{1106b}', 5), ('\u{1106c}', 6),
    ('\u{1106d}', 7), ('\u{1106e}', 8), ('\u{1106f}', 9), ('\u{110f0}', 0), ('\u{110f1}', 1), ('\u{110f2}', 2),
    ('\u{110f3}', 3), ('\u{110f4}', 4), ('\u{110f5}', 5), ('\u{110f6}', 6), ('\u{110f7}', 7), ('\u{110f8}', 8),
    ('\u{110f9}', 9), ('\u{11136}', 0), ('\u{11137}', 1), ('\u{11138}', 2), ('\u{11139}', 3), ('\u{1113a}', 4),
    ('\u{1113b}', 5), ('\u{1113c}', 6), ('\u{1113d}', 7), ('\u{1113e}', 8), ('\u{1113f}', 9), ('\u{111d0}', 0),
    ('\u{111d1}', 1), ('\u{111d2}', 2), ('\u{111d3}', 3), ('\u{111d4}', 4), ('\u{111d5}', 5), ('\u{111d6}', 6),
    ('\u{111d7}', 7), ('\u{111d8}', 8), ('\u{111d9}', 9), ('\u{112f0}', 0), ('\u{112f1}', 1), ('\u{112f2}', 2),
    ('\u{112f3}', 3), ('\u{112f4}', 4), ('\u{112f5}', 5), ('\u{112f6}', 6), ('\u{112f7}', 7), ('\u{112f8}', 8),
    ('\u{112f9}', 9), ('\u{11450}', 0), ('\u{11451}', 1), ('\u{11452}', 2), ('\u{11453}', 3), ('\u{11454}', 4),
    ('\u{11455}', 5), ('\u{11456}', 6), ('\u{11457}', 7), ('\u{11458}', 8), ('\u{11459}', 9), ('\u{114d0}', 0),
    ('\u{114d1}', 1), ('\u{114d2}', 2), ('\u{114d3}', 3), ('\u{114d4}', 4), ('\u{114d5}', 5), ('\u{114d6}', 6),
    ('\u{114d7}', 7), ('\u{114d8}', 8), ('\u{114d9}', 9), ('\u{11650}', 0), ('\u{11651}', 1), ('\u{11652}', 2),
    ('\u{11653}', 3), ('\u{11654}', 4), ('\u{11655}', 5), ('\u{11656}', 6), ('\u{11657}', 7), ('\u{11658}', 8),
    ('\u{11659}', 9), ('\u{116c0}', 0), ('\u{116c1}', 1), ('\u{116c2}', 2), ('\u{116c3}', 3), ('\u{116c4}', 4),
    ('\u{116c5}', 5), ('\u{116c6}', 6), ('\u{116c7}', 7), ('\u{116c8}', 8), ('\u{116c9}', 9), ('\u{11730}', 0),
    ('\u{11731}', 1), ('\u{11732}', 2), ('\u{11733}', 3), ('\u{11734}', 4), ('\u{11735}', 5), ('\u{11736}', 6),
    ('\u{11737}', 7), ('\u{11738}', 8), ('\u{11739}', 9), ('\u{118e0}', 0), ('\u{118e1}', 1), ('\u{118e2}', 2),
    ('\u{118e3}', 3), ('\u{118e4}', 4), ('\u{118e5}', 5), ('\u{118e6}', 6), ('\u{118e7}', 7), ('\u{118e8}', 8),
    ('\u{118e9}', 9), ('\u{11950}', 0), ('\u{11951}', 1), ('\u{11952}', 2), ('\u{11953}', 3), ('\u{11954}', 4),
    ('\u{11955}', 5), ('\u{11956}', 6), ('\u{11957}', 7), ('\u{11958}', 8), ('\u{11959}', 9), ('\u{11c50}', 0),
    ('\u{11c51}', 1), ('\u{11c52}', 2), ('\u{11c53}', 3), ('\u{11c54}', 4), ('\u{11c55}', 5), ('\u{11c56}', 6),
    ('\u{11c57}', 7), ('\u{11c58}', 8), ('\u{11c59}', 9), ('\u{11d50}', 0), ('\u{11d51}', 1), ('\u{11d52}', 2),
    ('\u{11d53}', 3), ('\u{11d54}', 4), ('\u{11d55}', 5), ('\u{11d56}', 6), ('\u{11d57}', 7), ('\u{11d58}', 8),
    ('\u{11d59}', 9), ('\u{11da0}', 0), ('\u{11da1}', 1), ('\u{11da2}', 2), ('\u{11da3}', 3), ('\u{11da4}', 4),
    ('\u{11da5}', 5), ('\u{11da6}', 6), ('\u{11da7}', 7), ('\u{11da8}', 8), ('\u{11da9}', 9), ('\u{16a60}', 0),
    ('\u{16a61}', 1), ('\u{16a62}', 2), ('\u{16a63}', 3), ('\u{16a64}', 4), ('\u{16a65}', 5), ('\u{16a66}', 6),
    ('\u{16a67}', 7), ('\u{16a68}', 8), ('\u{16a69}', 9), ('\u{16ac0}', 0), ('\u{16ac1}', 1), ('\u{16ac2}', 2),
    ('\u{16ac3}', 3), ('\u{16ac4}', 4), ('\u{16ac5}', 5), ('\u{16ac6}', 6), ('\u{16ac7}', 7), ('\u{16ac8}', 8),
    ('\u{16ac9}', 9), ('\u{16b50}', 0), ('\u{16b51}', 1), ('\u{16b52}', 2), ('\u{16b53}', 3), ('\u{16b54}', 4),
    ('\u{16b55}', 5), ('\u{16b56}', 6), ('\u{16b57}', 7), ('\u{16b58}', 8), ('\u{16b59}', 9), ('\u{1d7ce}', 0),
    ('\u{1d7cf}', 1), ('\u{1d7d0}', 2), ('\u{1d7d1}', 3), ('\u{1d7d2}', 4), ('\u{1d7d3}', 5), ('\u{1d7d4}', 6),
    ('\u{1d7d5}', 7), ('\u{1d7d6}', 8), ('\u{1d7d7}', 9), ('\u{1d7d8}', 0), ('\u{1d7d9}', 1), ('\u{1d7da}', 2),
    ('\u{1d7db}', 3), ('\u{1d7dc}', 4), ('\u{1d7dd}', 5), ('\u{1d7de}', 6), ('\u{1d7df}', 7), ('\u{1d7e0}', 8),
    ('\u{1d7e1}', 9), ('\u{1d7e2}', 0), ('\u{1d7e3}', 1), ('\u{1d7e4}', 2), ('\u{1d7e5}', 3), ('\u{1d7e6}', 4),
    ('\u{1d7e7}', 5), ('\u{1d7e8}', 6), ('\u{1d7e9}', 7), ('\u{1d7ea}', 8), ('\u{1d7eb}', 9), ('\u{1d7ec}', 0),
    ('\u{1d7ed}', 1), ('\u{1d7ee}', 2), ('\u{1d7ef}', 3), ('\u{1d7f0}', 4), ('\u{1d7f1}', 5), ('\u{1d7f2}', 6),
    ('\u{1d7f3}', 7), ('\u{1d7f4}', 8), ('\u{1d7f5}', 9), ('\u{1d7f6}', 0), ('\u{1d7f7}', 1), ('\u{1d7f8}', 2),
    ('\u{1d7f9}', 3), ('\u{1d7fa}', 4), ('\u{1d7fb}', 5), ('\u{1d7fc}', 6), ('\u{1d7fd}', 7), ('\u{1d7fe}', 8),
    ('\u{1d7ff}', 9), ('\u{1e140}', 0), ('\u{1e141}', 1), ('\u{1e142}', 2), ('\u{1e143}', 3), ('\u{1e144}', 4),
    ('\u{1e145}', 5), ('\u{1e146}', 6), ('\u{1e147}', 7), ('\u{1e148}', 8), ('\u{1e149}', 9), ('\u{1e2f0}', 0),
    ('\u{1e2f1}', 1), ('\u{1e2f2}', 2), ('\u{1e2f3}', 3), ('\u{1e2f4}', 4), ('\u{1e2f5}', 5), ('\u{1e2f6}', 6),
    ('\u{1e2f7}', 7), ('\u{1e2f8}', 8), ('\u{1e2f9}', 9), ('\u{1e950}', 0), ('\u{1e951}', 1), ('\u{1e952}', 2),
    ('\u{1e953}', 3), ('\u{1e954}', 4), ('\u{1e955}', 5), ('\u{1e956}', 6), ('\u{1e957}', 7), ('\u{1e958}', 8),
    ('\u{1e959}', 9), ('\u{1f100}', 0), ('\u{1f101}', 0), ('\u{1f102}', 1), ('\u{1f103}', 2), ('\u{1f104}', 3),
    ('\u{1f105}', 4), ('\u{1f106}', 5), ('\u{1f107}', 6), ('\u{1f108}', 7), ('\u{1f109}', 8), ('\u{1f10a}', 9),
    ('\u{1fbf0}', 0), ('\u{1fbf1}', 1), ('\u{1fbf2}', 2), ('\u{1fbf3}', 3), ('\u{1fbf4}', 4), ('\u{1fbf5}', 5),
    ('\u{1fbf6}', 6), ('\u{1fbf7}', 7), ('\u{1fbf8}', 8), ('\u{1fbf9}', 9),
];

#[rustfmt::skip]
pub(super) static DECIMALS: &[(char, u8)] = &[
    ('\u{660}', 0), ('\u{661}', 1), ('\u{662}', 2), ('\u{663}', 3), ('\u{664}', 4), ('\u{665}', 5),
    ('\u{666}', 6), ('\u{667}', 7), ('\u{668}', 8), ('\u{669}', 9), ('\u{6f0}', 0), ('\u{6f1}', 1),
    ('\u{6f2}', 2), ('\u{6f3}', 3), ('\u{6f4}', 4), ('\u{6f5}', 5), ('\u{6f6}', 6), ('\u{6f7}', 7),
    ('\u{6f8}', 8), ('\u{6f9}', 9), ('\u{7c0}', 0), ('\u{7c1}', 1), ('\u{7c2}', 2), ('\u{7c3}', 3),
    ('\u{7c4}', 4), ('\u{7c5}', 5), ('\u{7c6}', 6), ('\u{7c7}', 7), ('\u{7c8}', 8), ('\u{7c9}', 9),
    ('\u{966}', 0), ('\u{967}', 1), ('\u{968}', 2), ('\u{969}', 3), ('\u{96a}', 4), ('\u{96b}', 5),
    ('\u{96c}', 6), ('\u{96d}', 7), ('\u{96e}', 8), ('\u{96f}', 9), ('\u{9e6}', 0), ('\u{9e7}', 1),
    ('\u{9e8}', 2), ('\u{9e9}', 3), ('\u{9ea}', 4), ('\u{9eb}', 5), ('\u{9ec}', 6), ('\u{9ed}', 7),
    ('\u{9ee}', 8), ('\u{9ef}', 9), ('\u{a66}', 0), ('\u{a67}', 1), ('\u{a68}', 2), ('\u{a69}', 3),
    ('\u{a6a}', 4), ('\u{a6b}', 5), ('\u{a6c}', 6), ('\u{a6d}', 7), ('\u{a6e}', 8), ('\u{a6f}', 9),
    ('\u{ae6}', 0), ('\u{ae7}', 1), ('\u{ae8}', 2), ('\u{ae9}', 3), ('\u{aea}', 4), ('\u{aeb}', 5),
    ('\u{aec}', 6), ('\u{aed}', 7), ('\u{aee}', 8), ('\u{aef}', 9), ('\u{b66}', 0), ('\u{b67}', 1),
    ('\u{b68}', 2), ('\u{b69}', 3), ('\u{b6a}', 4), ('\u{b6b}', 5), ('\u{b6c}', 6), ('\u{b6d}', 7),
    ('\u{b6e}', 8), ('\u{b6f}', 9), ('\u{be6}', 0), ('\u{be7}', 1), ('\u{be8}', 2), ('\u{be9}', 3),
    ('\u{bea}', 4), ('\u{beb}', 5), ('\u{bec}', 6), ('\u{bed}', 7), ('\u{bee}', 8), ('\u{bef}', 9),
    ('\u{c66}', 0), ('\u{c67}', 1), ('\u{c68}', 2), ('\u{c69}', 3), ('\u{c6a}', 4), ('\u{c6b}', 5),
    ('\u{c6c}', 6), ('\u{c6d}', 7), ('\u{c6e}', 8), ('\u{c6f}', 9), ('\u{ce6}', 0), ('\u{ce7}', 1),
    ('\u{ce8}', 2), ('\u{ce9}', 3), ('\u{cea}', 4), ('\u{ceb}', 5), ('\u{cec}', 6), ('\u{ced}', 7),
    ('\u{cee}', 8), ('\u{cef}', 9), ('\u{d66}', 0), ('\u{d67}', 1), ('\u{d68}', 2), ('\u{d69}', 3),
    ('\u{d6a}', 4), ('\u{d6b}', 5), ('\u{d6c}', 6), ('\u{d6d}', 7), ('\u{d6e}', 8), ('\u{d6f}', 9),
    ('\u{de6}', 0), ('\u{de7}', 1), ('\u{de8}', 2), ('\u{de9}', 3), ('\u{dea}', 4), ('\u{deb}', 5),
    ('\u{dec}', 6), ('\u{ded}', 7), ('\u{dee}', 8), ('\u{def}', 9), ('\u{e50}', 0), ('\u{e51}', 1),
    ('\u{e52}', 2), ('\u{e53}', 3), ('\u{e54}', 4), ('\u{e55}', 5), ('\u{e56}', 6), ('\u{e57}', 7),
    ('\u{e58}', 8), ('\u{e59}', 9), ('\u{ed0}', 0), ('\u{ed1}', 1), ('\u{ed2}', 2), ('\u{ed3}', 3),
    ('\u{ed4}', 4), ('\u{ed5}', 5), ('\u{ed6}', 6), ('\u{ed7}', 7), ('\u{ed8}', 8), ('\u{ed9}', 9),
    ('\u{f20}', 0), ('\u{f21}', 1), ('\u{f22}', 2), ('\u{f23}', 3), ('\u{f24}', 4), ('\u{f25}', 5),
    ('\u{f26}', 6), ('\u{f27}', 7), ('\u{f28}', 8), ('\u{f29}', 9), ('\u{1040}', 0), ('\u{1041}', 1),
    ('\u{1042}', 2), ('\u{1043}', 3), ('\u{1044}', 4), ('\u{1045}', 5), ('\u{1046}', 6), ('\u{1047}', 7),
    ('\u{1048}', 8), ('\u{1049}', 9), ('\u{1090}', 0), ('\u{1091}', 1), ('\u{1092}', 2), ('\u{1093}', 3),
    ('\u{1094}', 4), ('\u{1095}', 5), ('\u{1096}', 6), ('\u{1097}', 7), ('\u{1098}', 8), ('\u{1099}', 9),
    ('\u{17e0}', 0), ('\u{17e1}', 1), ('\u{17e2}', 2), ('\u{17e3}', 3), ('\u{17e4}', 4), ('\u{17e5}', 5),
    ('\u{17e6}', 6), ('\u{17e7}', 7), ('\u{17e8}', 8), ('\u{17e9}', 9), ('\u{1810}', 0), ('\u{1811}', 1),
    ('\u{1812}', 2), ('\u{1813}', 3), ('\u{1814}', 4), ('\u{1815}', 5), ('\u{1816}', 6), ('\u{1817}', 7),
    ('\u{1818}', 8), ('\u{1819}', 9), ('\u{1946}', 0), ('\u{1947}', 1), ('\u{1948}', 2), ('\u{1949}', 3),
    ('\u{194a}', 4), ('\u{194b}', 5), ('\u{194c}', 6), ('\u{194d}', 7), ('\u{194e}', 8), ('\u{194f}', 9),
    ('\u{19d0}', 0), ('\u{19d1}', 1), ('\u{19d2}', 2), ('\u{19d3}', 3), ('\u{19d4}', 4), ('\u{19d5}', 5),
    ('\u{19d6}', 6), ('\u{19d7}', 7), ('\u{19d8}', 8), ('\u{19d9}', 9), ('\u{1a80}', 0), ('\u{1a81}', 1),
    ('\u{1a82}', 2), ('\u{1a83}', 3), ('\u{1a84}', 4), ('\u{1a85}', 5), ('\u{1a86}', 6), ('\u{1a87}', 7),
    ('\u{1a88}', 8), ('\u{1a89}', 9), ('\u{1a90}', 0), ('\u{1a91}', 1), ('\u{1a92}', 2), ('\u{1a93}', 3),
    ('\u{1a94}', 4), ('\u{1a95}', 5), ('\u{1a96}', 6), ('\u{1a97}', 7), ('\u{1a98}', 8), ('\u{1a99}', 9),
    ('\u{1b50}', 0), ('\u{1b51}', 1), ('\u{1b52}', 2), ('\u{1b53}', 3), ('\u{1b54}', 4), ('\u{1b55}', 5),
    ('\u{1b56}', 6), ('\u{1b57}', 7), ('\u{1b58}', 8), ('\u{1b59}', 9), ('\u{1bb0}', 0), ('\u{1bb1}', 1),
    ('\u{1bb2}', 2), ('\u{1bb3}', 3), ('\u{1bb4}', 4), ('\u{1bb5}', 5), ('\u{1bb6}', 6), ('\u{1bb7}', 7),
    ('\u{1bb8}', 8), ('\u{1bb9}', 9), ('\u{1c40}', 0), ('\u{1c41}', 1), ('\u{1c42}', 2), ('\u{1c43}', 3),
    ('\u{1c44}', 4), ('\u{1c45}', 5), ('\u{1c46}', 6), ('\u{1c47}', 7), ('\u{1c48}', 8), ('\u{1c49}', 9),
    ('\u{1c50}', 0), ('\u{1c51}', 1), ('\u{1c52}', 2), ('\u{1c53}', 3), ('\u{1c54}', 4), ('\u{1c55}', 5),
    ('\u{1c56}', 6), ('\u{1c57}', 7), ('\u{1c58}', 8), ('\u{1c59}', 9), ('\u{a620}', 0), ('\u{a621}', 1),
    ('\u{a622}', 2), ('\u{a623}', 3), ('\u{a624}', 4), ('\u{a625}', 5), ('\u{a626}', 6), ('\u{a627}', 7),
    ('\u{a628}', 8), ('\u{a629}', 9), ('\u{a8d0}', 0), ('\u{a8d1}', 1), ('\u{a8d2}', 2), ('\u{a8d3}', 3),
    ('\u{a8d4}', 4), ('\u{a8d5}', 5), ('\u{a8d6}', 6), ('\u{a8d7}', 7), ('\u{a8d8}', 8), ('\u{a8d9}', 9),
    ('\u{a900}', 0), ('\u{a901}', 1), ('\u{a902}', 2), ('\u{a903}', 3), ('\u{a904}', 4), ('\u{a905}', 5),
    ('\u{a906}', 6), ('\u{a907}', 7), ('\u{a908}', 8), ('\u{a909}', 9), ('\u{a9d0}', 0), ('\u{a9d1}', 1),
    ('\u{a9d2}', 2), ('\u{a9d3}', 3), ('\u{a9d4}', 4), ('\u{a9d5}', 5), ('\u{a9d6}', 6), ('\u{a9d7}', 7),
    ('\u{a9d8}', 8), ('\u{a9d9}', 9), ('\u{a9f0}', 0), ('\u{a9f1}', 1), ('\u{a9f2}', 2), ('\u{a9f3}', 3),
    ('\u{a9f4}', 4), ('\u{a9f5}', 5), ('\u{a9f6}', 6), ('\u{a9f7}', 7), ('\u{a9f8}', 8), ('\u{a9f9}', 9),
    ('\u{aa50}', 0), ('\u{aa51}', 1), ('\u{aa52}', 2), ('\u{aa53}', 3), ('\u{aa54}', 4), ('\u{aa55}', 5),
    ('\u{aa56}', 6), ('\u{aa57}', 7), ('\u{aa58}', 8), ('\u{aa59}', 9), ('\u{abf0}', 0), ('\u{abf1}', 1),
    ('\u{abf2}', 2), ('\u{abf3}', 3), ('\u{abf4}', 4), ('\u{abf5}', 5), ('\u{abf6}', 6), ('\u{abf7}', 7),
    ('\u{abf8}', 8), ('\u{abf9}', 9), ('\u{ff10}', 0), ('\u{ff11}', 1), ('\u{ff12}', 2), ('\u{ff13}', 3),
    ('\u{ff14}', 4), ('\u{ff15}', 5), ('\u{ff16}', 6), ('\u{ff17}', 7), ('\u{ff18}', 8), ('\u{ff19}', 9),
    ('\u{104a0}', 0), ('\u{104a1}', 1), ('\u{104a2}', 2), ('\u{104a3}', 3), ('\u{104a4}', 4), ('\u{104a5}', 5),
    ('\u{104a6}', 6), ('\u{104a7}', 7), ('\u{104a8}', 8), ('\u{104a9}', 9), ('\u{10d30}', 0), ('\u{10d31}', 1),
    ('\u{10d32}', 2), ('\u{10d33}', 3), ('\u{10d34}', 4), ('\u{10d35}', 5), ('\u{10d36}', 6), ('\u{10d37}', 7),
    ('\u{10d38}', 8), ('\u{10d39}', 9), ('\u{11066}', 0), ('\u{11067}', 1), ('\u{11068}', 2), ('\u{11069}', 3),
    ('\u{1106a}', 4), ('\u{1106b}', 5), ('\u{1106c}', 6), ('\u{1106d}', 7), ('\u{1106e}', 8), ('\u{1106f}', 9),
    ('\u{110f0}', 0), ('\u{110f1}', 1), ('\u{110f2}', 2), ('\u{110f3}', 3), ('\u{110f4}', 4), ('\u{110f5}', 5),
    ('\u{110f6}', 6), ('\u{110f7}', 7), ('\u{110f8}', 8), ('\u{110f9}', 9), ('\u{11136}', 0), ('\u{11137}', 1),
    ('\u{11138}', 2), ('\u{11139}', 3), ('\u{1113a}', 4), ('\u{1113b}', 5), ('\u{1113c}', 6), ('\u{1113d}', 7),
    ('\u{1113e}', 8), ('\u{1113f}', 9), ('\u{111d0}', 0), ('\u{111d1}', 1), ('\u{111d2}', 2), ('\u{111d3}', 3),
    ('\u{111d4}', 4), ('\u{111d5}', 5), ('\u{111d6}', 6), ('\u{111d7}', 7), ('\u{111d8}', 8), ('\u{111d9}', 9),
    ('\u{112f0}', 0), ('\u{112f1}', 1), ('\u{112f2}', 2), ('\u{112f3}', 3), ('\u{112f4}', 4), ('\u{112f5}', 5),
    ('\u{112f6}', 6), ('\u{112f7}', 7), ('\u{112f8}', 8), ('\u{112f9}', 9), ('\u{11450}', 0), ('\u{11451}', 1),
    ('\u{11452}', 2), ('\u{11453}', 3), ('\u{11454}', 4), ('\u{11455}', 5), ('\u{11456}', 6), ('\u{11457}', 7),
    ('\u{11458}', 8), ('\u{11459}', 9), ('\u{114d0}', 0), ('\u{114d1}', 1), ('\u{114d2}', 2), ('\u{114d3}', 3),
    ('\u{114d4}', 4), ('\u{114d5}', 5), ('\u{114d6}', 6), ('\u{114d7}', 7), ('\u{114d8}', 8), ('\u{114d9}', 9),
    ('\u{11650}', 0), ('\u{11651}', 1), ('\u{11652}', 2), ('\u{11653}', 3), ('\u{11654}', 4), ('\u{11655}', 5),
    ('\u{11656}', 6), ('\u{11657}', 7), ('\u{11658}', 8), ('\u{11659}', 9), ('\u{116c0}', 0), ('\u{116c1}', 1),
    ('\u{116c2}', 2), ('\u{116c3}', 3), ('\u{116c4}', 4), ('\u{116c5}', 5), ('\u{116c6}', 6), ('\u{116c7}', 7),
    ('\u{116c8}', 8), ('\u{116c9}', 9), ('\u{11730}', 0), ('\u{11731}', 1), ('\u{11732}', 2), ('\u{11733}', 3),
    ('\u{11734}', 4), ('\u{11735}', 5), ('\u{11736}', 6), ('\u{11737}', 7), ('\u{11738}', 8), ('\u{11739}', 9),
    ('\u{118e0}', 0), ('\u{118e1}', 1), ('\u{118e2}', 2), ('\u{118e3}', 3), ('\u{118e4}', 4), ('\u{118e5}', 5),
    ('\u{118e6}', 6), ('\u{118e7}', 7), ('\u{118e8}', 8), ('\u{118e9}', 9), ('\u{11950}', 0), ('\u{11951}', 1),
    ('\u{11952}', 2), ('\u{11953}', 3), ('\u{11954}', 4), ('\u{11955}', 5), ('\u{11956}', 6), ('\u{11957}', 7),
    ('\u{11958}', 8), ('\u{11959}', 9), ('\u{11c50}', 0), ('\u{11c51}', 1), ('\u{11c52}', 2), ('\u{11c53}', 3),
    ('\u{11c54}', 4), ('\u{11c55}', 5), ('\u{11c56}', 6), ('\u{11c57}', 7), ('\u{11c58}', 8), ('\u{11c59}', 9),
    ('\u{11d50}', 0), ('\u{11d51}', 1), ('\u{11d52}', 2), ('\u{11d53}', 3), ('\u{11d54}', 4), ('\u{11d55}', 5),
    ('\u{11d56}', 6), ('\u{11d57}', 7), ('\u{11d58}', 8), ('\u{11d59}', 9), ('\u{11da0}', 0), ('\u{11da1}', 1),
    ('\u{11da2}', 2), ('\u{11da3}', 3), ('\u{11da4}', 4), ('\u{11da5}', 5), ('\u{11da6}', 6), ('\u{11da7}', 7),
    ('\u{11da8}', 8), ('\u{11da9}', 9), ('\u{16a60}', 0), ('\u{16a61}', 1), ('\u{16a62}', 2), ('\u{16a63}', 3),
    ('\u{16a64}', 4), ('\u{16a65}', 5), ('\u{16a66}', 6), ('\u{16a67}', 7), ('\u{16a68}', 8), ('\u{16a69}', 9),
    ('\u{16ac0}', 0), ('\u{16ac1}', 1), ('\u{16ac2}', 2), ('\u{16ac3}', 3), ('\u{16ac4}', 4), ('\u{16ac5}', 5),
    ('\u{16ac6}', 6), ('\u{16ac7}', 7), ('\u{16ac8}', 8), ('\u{16ac9}', 9), ('\u{16b50}', 0), ('\u{16b51}', 1),
    ('\u{16b52}', 2), ('\u{16b53}', 3), ('\u{16b54}', 4), ('\u{16b55}', 5), ('\u{16b56}', 6), ('\u{16b57}', 7),
    ('\u{16b58}', 8), ('\u{16b59}', 9), ('\u{1d7ce}', 0), ('\u{1d7cf}', 1), ('\u{1d7d0}', 2), ('\u{1d7d1}', 3),
    ('\u{1d7d2}', 4), ('\u{1d7d3}', 5), ('\u{1d7d4}', 6), ('\u{1d7d5}', 7), ('\u{1d7d6}', 8), ('\u{1d7d7}', 9),
    ('\u{1d7d8}', 0), ('\u{1d7d9}', 1), ('\u{1d7da}', 2), ('\u{1d7db}', 3), ('\u{1d7dc}', 4), ('\u{1d7dd}', 5),
    ('\u{1d7de}', 6), ('\u{1d7df}', 7), ('\u{1d7e0}', 8), ('\u{1d7e1}', 9), ('\u{1d7e2}', 0), ('\u{1d7e3}', 1),
    ('\u{1d7e4}', 2), ('\u{1d7e5}', 3), ('\u{1d7e6}', 4), ('\u{1d7e7}', 5), ('\u{1d7e8}', 6), ('\u{1d7e9}', 7),
    ('\u{1d7ea}', 8), ('\u{1d7eb}', 9), ('\u{1d7ec}', 0), ('\u{1d7ed}', 1), ('\u{1d7ee}', 2), ('\u{1d7ef}', 3),
    ('\u{1d7f0}', 4), ('\u{1d7f1}', 5), ('\u{1d7f2}', 6), ('\u{1d7f3}', 7), ('\u{1d7f4}', 8), ('\u{1d7f5}', 9),
    ('\u{1d7f6}', 0), ('\u{1d7f7}', 1), ('\u{1d7f8}', 2), ('\u{1d7f9}', 3), ('\u{1d7fa}', 4), ('\u{1d7fb}', 5),
    ('\u{1d7fc}', 6), ('\u{1d7fd}', 7), ('\u{1d7fe}', 8), ('\u{1d7ff}', 9), ('\u{1e140}', 0), ('\u{1e141}', 1),
    ('\u{1e142}', 2), ('\u{1e143}', 3), ('\u{1e144}', 4), ('\u{1e145}', 5), ('\u{1e146}', 6), ('\u{1e147}', 7),
    ('\u{1e148}', 8), ('\u{1e149}', 9), ('\u{1e2f0}', 0), ('\u{1e2f1}', 1), ('\u{1e2f2}', 2), ('\u{1e2f3}', 3),
    ('\u{1e2f4}', 4), ('\u{1e2f5}', 5), ('\u{1e2f6}', 6), ('\u{1e2f7}', 7), ('\u{1e2f8}', 8), ('\u{1e2f9}', 9),
    ('\u{1e950}', 0), ('\u{1e951}', 1), ('\u{1e952}', 2), ('\u{1e953}', 3), ('\u{1e954}', 4), ('\u{1e955}', 5),
    ('\u{1e956}', 6), ('\u{1e957}', 7), ('\u{1e958}', 8), ('\u{1e959}', 9), ('\u{1fbf0}', 0), ('\u{1fbf1}', 1),
    ('\u{1fbf2}', 2), ('\u{1fbf3}', 3), ('\u{1fbf4}', 4), ('\u{1fbf5}', 5), ('\u{1fbf6}', 6), ('\u{1fbf7}', 7),
    ('\u{1fbf8}', 8), ('\u{1fbf9}', 9),
];
